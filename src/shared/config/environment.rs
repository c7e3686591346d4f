use crate::shared::errors::{AppError, AppResult};
use chrono_tz::Tz;
use std::path::PathBuf;
use std::str::FromStr;

/// アプリケーションの実行環境を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 開発環境
    Development,
    /// プロダクション環境
    Production,
}

/// 永続化に使用するストアの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// 単一JSONファイル（デフォルト）
    File,
    /// SQLiteデータベース
    Sqlite,
    /// メモリ上のみ（終了時に破棄される）
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(StorageBackend::File),
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::configuration(format!(
                "不明なストレージバックエンドです: {other}"
            ))),
        }
    }
}

/// 環境設定を管理する構造体
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// 実行環境
    pub environment: Environment,
    /// デバッグモードの有効/無効
    pub debug_mode: bool,
    /// ログレベル
    pub log_level: String,
    /// ストレージバックエンド
    pub storage_backend: StorageBackend,
    /// データディレクトリ（未指定の場合はOS標準のデータディレクトリ）
    pub data_dir: Option<PathBuf>,
    /// 日付計算に使うタイムゾーン（未指定の場合はシステムのローカル時刻）
    pub timezone: Option<Tz>,
}

impl EnvironmentConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # 戻り値
    /// 環境設定、または不正な値がある場合はエラー
    pub fn from_env() -> AppResult<Self> {
        let environment = get_environment();
        let debug_mode = environment == Environment::Development;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if debug_mode {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        let storage_backend = match std::env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::File,
        };

        let data_dir = std::env::var("DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let timezone = match std::env::var("TIMEZONE") {
            Ok(name) if !name.trim().is_empty() => Some(parse_timezone(&name)?),
            _ => None,
        };

        Ok(Self {
            environment,
            debug_mode,
            log_level,
            storage_backend,
            data_dir,
            timezone,
        })
    }

    /// プロダクション環境かどうかを判定
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// 開発環境かどうかを判定
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            debug_mode: true,
            log_level: "debug".to_string(),
            storage_backend: StorageBackend::File,
            data_dir: None,
            timezone: None,
        }
    }
}

/// IANAタイムゾーン名を解析する
fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| AppError::configuration(format!("不正なタイムゾーンです: {name} ({e})")))
}

/// 現在の実行環境を判定する
///
/// # 判定ロジック
/// 1. 実行時環境変数 ENVIRONMENT を確認
/// 2. デバッグビルドの場合は Development
/// 3. リリースビルドの場合は Production
pub fn get_environment() -> Environment {
    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        let env = match env_var.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        log::debug!("環境判定: 実行時環境変数を使用 -> {env_var} -> {env:?}");
        return env;
    }

    // フォールバック: ビルド設定に基づく判定
    let env = if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    };
    log::debug!(
        "環境判定: ビルド設定を使用 -> debug_assertions={} -> {env:?}",
        cfg!(debug_assertions)
    );
    env
}

/// 環境とバックエンドに応じたストアファイル名を取得する
///
/// # ファイル名の規則
/// - 開発環境: "dev_expenses.json" / "dev_expenses.db"
/// - プロダクション環境: "expenses.json" / "expenses.db"
/// - メモリストアはファイルを持たない
pub fn get_store_filename(env: Environment, backend: StorageBackend) -> Option<&'static str> {
    match (env, backend) {
        (_, StorageBackend::Memory) => None,
        (Environment::Development, StorageBackend::File) => Some("dev_expenses.json"),
        (Environment::Production, StorageBackend::File) => Some("expenses.json"),
        (Environment::Development, StorageBackend::Sqlite) => Some("dev_expenses.db"),
        (Environment::Production, StorageBackend::Sqlite) => Some("expenses.db"),
    }
}

/// 環境に応じた.envファイルを読み込む
pub fn load_environment_variables() {
    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    let env_file = match environment.as_str() {
        "production" => ".env.production",
        _ => ".env",
    };

    log::info!("環境: {environment}, 読み込み対象: {env_file}");

    match dotenv::from_filename(env_file) {
        Ok(_) => {
            log::info!("{env_file}ファイルを読み込みました");
        }
        Err(_) => {
            // 環境固有のファイルがない場合は、デフォルトの.envを試行
            if env_file != ".env" && dotenv::dotenv().is_ok() {
                log::warn!("{env_file}が見つからないため、デフォルトの.envファイルを読み込みました");
            } else {
                log::warn!("環境変数ファイルが見つかりません。直接設定された環境変数を使用します。");
            }
        }
    }
}

/// ログシステムを初期化する
///
/// 二回目以降の呼び出し（テストなど）では既存のロガーをそのまま使う。
pub fn initialize_logging_system(config: &EnvironmentConfig) {
    let log_level = parse_log_level(&config.log_level);

    let result = env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .try_init();

    match result {
        Ok(()) => log::info!(
            "ログシステムを初期化しました: level={}, environment={:?}",
            config.log_level,
            config.environment
        ),
        Err(_) => log::debug!("ログシステムは初期化済みです"),
    }
}

fn parse_log_level(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    }
}
