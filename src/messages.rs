//! User-facing messages.

use crate::infra::Access;

pub const FOLDER_UNSELECTED: &str = "フォルダ: 未選択";
pub const FOLDER_ERROR: &str = "フォルダ: エラー";
pub const CHOOSE_FOLDER_FIRST: &str =
    "最初に「フォルダ選択」ボタンから、メモを保存するフォルダを選択してください。";
pub const SELECT_FOLDER: &str = "フォルダを選択してください";
pub const SAVED: &str = "保存しました";
pub const DELETED: &str = "削除しました";

/// Status line for a folder chosen in this session.
pub fn folder_status(name: &str) -> String {
    format!("フォルダ: {}", name)
}

/// Status line for a folder restored from a previous session.
pub fn folder_status_restored(name: &str) -> String {
    format!("フォルダ: {} (再認証が必要な場合があります)", name)
}

pub fn save_failed(detail: &str) -> String {
    format!("保存に失敗しました: {}", detail)
}

pub const FOLDER_PATH_PROMPT: &str = "メモを保存するフォルダのパス: ";

/// Question asked before granting folder access.
pub fn access_prompt(name: &str, access: Access) -> String {
    let level = match access {
        Access::Read => "読み取り",
        Access::ReadWrite => "読み書き",
    };
    format!("フォルダ「{}」への{}を許可しますか? [y/N] ", name, level)
}
