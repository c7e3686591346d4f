use crate::features::categories::{self, Category};
use crate::features::expenses::{self, Expense};
use crate::shared::storage::KeyValueStore;

/// 経費・カテゴリーの永続化を一手に引き受けるリポジトリ
///
/// ストアの唯一の書き込み手。表示層はこのハンドルを受け取り、
/// ストアに直接書き込むことはない。
/// ストアの障害はすべてここで吸収され、空データ（または既定カテゴリー）として扱われる。
pub struct Repository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    /// ストアを注入してリポジトリを作成する
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 経費一覧（新しい順）
    pub fn list_expenses(&self) -> Vec<Expense> {
        expenses::repository::find_all(&self.store)
    }

    /// 経費を先頭に追加する
    pub fn append_expense(&self, expense: Expense) {
        expenses::repository::prepend(&self.store, expense);
    }

    /// 既定カテゴリー + カスタムカテゴリーの一覧
    pub fn list_categories(&self) -> Vec<Category> {
        categories::repository::find_all(&self.store)
    }

    /// カテゴリーを追加する（既定カテゴリーは保存されない）
    pub fn add_category(&self, category: Category) {
        categories::repository::append(&self.store, category);
    }

    /// すべての経費とカスタムカテゴリーを削除する
    pub fn clear_all(&self) {
        expenses::repository::clear(&self.store);
        categories::repository::clear(&self.store);
        log::info!("すべてのデータを削除しました");
    }
}
