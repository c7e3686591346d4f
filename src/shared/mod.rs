/// 共有エラー型とエラーハンドリング
pub mod errors;

/// キー・バリューストアと保存形式
pub mod storage;

/// 共有設定管理
pub mod config;

/// 共有ユーティリティ関数
pub mod utils;

// 便利な再エクスポート
pub use config::{
    get_environment, get_store_filename, initialize_application, initialize_logging_system,
    load_environment_variables, log_initialization_complete, Environment, EnvironmentConfig,
    InitializationResult, StorageBackend,
};
pub use errors::{AppError, AppResult, ErrorSeverity};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, SqliteStore};
pub use utils::{format_amount, Clock};
