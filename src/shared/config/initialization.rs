use crate::repository::Repository;
use crate::shared::config::environment::{get_store_filename, Environment, EnvironmentConfig, StorageBackend};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::storage::{JsonFileStore, KeyValueStore, MemoryStore, SqliteStore};
use crate::shared::utils::Clock;
use crate::AppState;
use std::fs;
use std::path::{Path, PathBuf};

/// データディレクトリ名（OS標準のデータディレクトリ配下）
const APP_DIR_NAME: &str = "expense-ledger";

/// アプリケーション初期化の結果を表す構造体
#[derive(Debug, Clone, PartialEq)]
pub struct InitializationResult {
    /// 初回起動かどうか
    pub is_first_run: bool,
    /// アプリケーションデータディレクトリのパス（メモリストアの場合はなし）
    pub app_data_dir: Option<PathBuf>,
    /// ストアファイルのパス（メモリストアの場合はなし）
    pub store_path: Option<PathBuf>,
    /// 使用するストアの種類
    pub storage_backend: StorageBackend,
    /// 実行環境
    pub environment: Environment,
}

/// アプリケーションの初期化を実行する
///
/// # 引数
/// * `config` - 環境設定
///
/// # 戻り値
/// アプリケーション状態、または失敗時はエラー
///
/// # 処理内容
/// 1. アプリケーションデータディレクトリの作成
/// 2. 初回起動の判定（ストアファイルの存在で判定）
/// 3. 設定に応じたストアを開く
/// 4. 設定されたタイムゾーンの時計を用意する
pub fn initialize_application(config: &EnvironmentConfig) -> AppResult<AppState> {
    let environment = config.environment;
    let backend = config.storage_backend;

    let (app_data_dir, store_path) = match get_store_filename(environment, backend) {
        Some(filename) => {
            let dir = ensure_app_data_directory(config.data_dir.as_deref())?;
            let path = dir.join(filename);
            (Some(dir), Some(path))
        }
        None => (None, None),
    };

    let is_first_run = store_path.as_ref().map_or(true, |path| !path.exists());

    let result = InitializationResult {
        is_first_run,
        app_data_dir,
        store_path,
        storage_backend: backend,
        environment,
    };

    // 初回起動の場合、初期化ログを出力
    if result.is_first_run {
        log_first_run_initialization(&result);
    }

    let store = open_store(backend, result.store_path.as_deref())?;
    log_initialization_complete(&result);

    Ok(AppState {
        repository: Repository::new(store),
        clock: Clock::new(config.timezone),
        initialization: result,
    })
}

/// ストアを開く
///
/// # 引数
/// * `backend` - ストアの種類
/// * `path` - ストアファイルのパス（ファイル系のストアでは必須）
pub fn open_store(backend: StorageBackend, path: Option<&Path>) -> AppResult<Box<dyn KeyValueStore>> {
    let require_path = || {
        path.ok_or_else(|| {
            AppError::configuration(format!("{backend:?}ストアにはファイルパスが必要です"))
        })
    };

    let store: Box<dyn KeyValueStore> = match backend {
        StorageBackend::File => Box::new(JsonFileStore::new(require_path()?)),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(require_path()?)?),
        StorageBackend::Memory => {
            log::warn!("メモリストアを使用します。データは終了時に破棄されます");
            Box::new(MemoryStore::new())
        }
    };

    Ok(store)
}

/// アプリケーションデータディレクトリを確実に作成する
///
/// # 引数
/// * `configured` - 設定で指定されたディレクトリ（未指定の場合はOS標準）
fn ensure_app_data_directory(configured: Option<&Path>) -> AppResult<PathBuf> {
    let app_data_dir = match configured {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_dir()
            .ok_or_else(|| AppError::configuration("データディレクトリを特定できません"))?
            .join(APP_DIR_NAME),
    };

    // ディレクトリが存在しない場合は作成
    if !app_data_dir.exists() {
        fs::create_dir_all(&app_data_dir)?;
        log::info!("アプリケーションデータディレクトリを作成しました: {app_data_dir:?}");
    }

    Ok(app_data_dir)
}

/// 初回起動時の初期化ログを出力する
fn log_first_run_initialization(result: &InitializationResult) {
    log::info!("=== アプリケーション初回起動 ===");
    log::info!("実行環境: {:?}", result.environment);
    log::info!("ストア: {:?}", result.storage_backend);
    if let Some(dir) = &result.app_data_dir {
        log::info!("アプリデータディレクトリ: {dir:?}");
    }
    if let Some(path) = &result.store_path {
        log::info!("ストアファイル: {path:?}");
    }
}

/// 初期化完了ログを出力する
///
/// # 引数
/// * `result` - 初期化結果
pub fn log_initialization_complete(result: &InitializationResult) {
    if result.is_first_run {
        log::info!("初回起動の初期化が正常に完了しました");
    } else {
        log::info!("アプリケーション起動完了（既存データを使用）");
    }
    log::info!(
        "環境: {:?}, ストア: {:?}",
        result.environment,
        result.store_path
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::expenses::ExpenseForm;
    use tempfile::TempDir;

    fn config(backend: StorageBackend, dir: &Path) -> EnvironmentConfig {
        EnvironmentConfig {
            storage_backend: backend,
            data_dir: Some(dir.to_path_buf()),
            ..EnvironmentConfig::default()
        }
    }

    fn form(amount: &str) -> ExpenseForm {
        ExpenseForm {
            amount: amount.to_string(),
            category: "food".to_string(),
            note: None,
        }
    }

    #[test]
    fn test_first_run_creates_data_directory() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("nested").join("ledger");

        let state = initialize_application(&config(StorageBackend::File, &data_dir)).unwrap();

        assert!(state.initialization.is_first_run);
        assert!(data_dir.exists());
        assert_eq!(
            state.initialization.store_path,
            Some(data_dir.join("dev_expenses.json"))
        );
    }

    #[test]
    fn test_second_run_reuses_existing_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = config(StorageBackend::File, temp_dir.path());

        let state = initialize_application(&cfg).unwrap();
        state.add_expense(&form("12.5")).unwrap();

        let reopened = initialize_application(&cfg).unwrap();
        assert!(!reopened.initialization.is_first_run);
        assert_eq!(reopened.repository.list_expenses().len(), 1);
    }

    #[test]
    fn test_sqlite_backend() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = EnvironmentConfig {
            environment: Environment::Production,
            ..config(StorageBackend::Sqlite, temp_dir.path())
        };

        let state = initialize_application(&cfg).unwrap();
        assert_eq!(
            state.initialization.store_path,
            Some(temp_dir.path().join("expenses.db"))
        );
        state.add_expense(&form("3")).unwrap();

        let reopened = initialize_application(&cfg).unwrap();
        assert!(!reopened.initialization.is_first_run);
        assert_eq!(reopened.repository.list_expenses().len(), 1);
    }

    #[test]
    fn test_memory_backend_has_no_files() {
        let temp_dir = TempDir::new().unwrap();
        let state = initialize_application(&config(StorageBackend::Memory, temp_dir.path())).unwrap();

        assert!(state.initialization.is_first_run);
        assert_eq!(state.initialization.app_data_dir, None);
        assert_eq!(state.initialization.store_path, None);
        assert!(state.repository.list_expenses().is_empty());
    }

    #[test]
    fn test_open_store_requires_path_for_files() {
        assert!(matches!(
            open_store(StorageBackend::File, None),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            open_store(StorageBackend::Sqlite, None),
            Err(AppError::Configuration(_))
        ));
        assert!(open_store(StorageBackend::Memory, None).is_ok());
    }
}
