/// 機能別モジュール
///
/// 各機能モジュールは、その機能に関連するコード（モデル、コマンド、ストア操作、集計）
/// を含む自己完結型のユニットです。
pub mod categories;
pub mod expenses;
pub mod summary;
