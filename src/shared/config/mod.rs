/// 環境設定管理モジュール
pub mod environment;

/// アプリケーション初期化モジュール
pub mod initialization;

// 便利な再エクスポート
pub use environment::{
    get_environment, get_store_filename, initialize_logging_system, load_environment_variables,
    Environment, EnvironmentConfig, StorageBackend,
};
pub use initialization::{
    initialize_application, log_initialization_complete, open_store, InitializationResult,
};
