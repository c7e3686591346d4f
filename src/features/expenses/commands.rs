use crate::features::expenses::models::{Expense, ExpenseForm};
use crate::repository::Repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::storage::KeyValueStore;
use crate::shared::utils::{generate_expense_id, parse_amount, Clock};

/// 経費を作成する
///
/// # 引数
/// * `repo` - リポジトリ
/// * `form` - 経費作成フォームの入力値
/// * `clock` - ID・計上日・作成時刻を決める時計
///
/// # 戻り値
/// 作成された経費、またはバリデーション失敗時はエラー（この場合は何も保存しない）
pub fn create_expense<S: KeyValueStore>(
    repo: &Repository<S>,
    form: &ExpenseForm,
    clock: &Clock,
) -> AppResult<Expense> {
    // バリデーション
    let amount = validate_expense_form(form)?;

    let now = clock.now();
    // メモは入力されたまま保存し、空文字のみ未入力として扱う
    let note = form.note.clone().filter(|note| !note.is_empty());

    let expense = Expense {
        id: generate_expense_id(now),
        amount,
        category: form.category.clone(),
        note,
        date: clock.date_of(now),
        created_at: now,
    };

    repo.append_expense(expense.clone());
    log::info!(
        "経費を作成しました: id={}, category={}",
        expense.id,
        expense.category
    );

    Ok(expense)
}

/// 経費作成フォームのバリデーション
///
/// # 戻り値
/// 解析済みの金額、または不正な入力の場合はエラー
fn validate_expense_form(form: &ExpenseForm) -> AppResult<f64> {
    // バリデーション: 金額とカテゴリーは必須
    if form.amount.trim().is_empty() || form.category.trim().is_empty() {
        return Err(AppError::validation("金額とカテゴリーを入力してください"));
    }

    // バリデーション: 金額は正の数値
    parse_amount(&form.amount)
}
