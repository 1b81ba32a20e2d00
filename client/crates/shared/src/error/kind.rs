//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that classifies client-side failures
//! by how they are surfaced to the user.

use serde::Serialize;

/// エラー種別の列挙体
///
/// クライアント側で発生するエラーを、ユーザーへの提示方法で分類します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::RequestFailure;
/// assert!(kind.is_user_facing());
/// assert_eq!(kind.as_str(), "Request Failure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// フィールド単位の検証失敗（インライン表示、送出しない）
    ValidationFailure,
    /// API / ネットワークエラー（通知表示し、呼び出し元へ再送出）
    RequestFailure,
    /// 永続化データの破損（匿名状態へ黙ってフォールバック）
    MalformedPersistedState,
    /// 永続ストレージへの書き込み失敗
    StorageFailure,
    /// 内部エラー
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::ValidationFailure.as_str(), "Validation Failure");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailure => "Validation Failure",
            ErrorKind::RequestFailure => "Request Failure",
            ErrorKind::MalformedPersistedState => "Malformed Persisted State",
            ErrorKind::StorageFailure => "Storage Failure",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// ユーザーに表示すべきエラーかどうかを判定
    ///
    /// 破損した永続化データはローカルで回復されるため `false` を返します。
    #[inline]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ErrorKind::ValidationFailure | ErrorKind::RequestFailure | ErrorKind::Internal
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing() {
        assert!(ErrorKind::ValidationFailure.is_user_facing());
        assert!(ErrorKind::RequestFailure.is_user_facing());
        assert!(!ErrorKind::MalformedPersistedState.is_user_facing());
        assert!(!ErrorKind::StorageFailure.is_user_facing());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorKind::MalformedPersistedState).unwrap();
        assert_eq!(json, "\"MALFORMED_PERSISTED_STATE\"");
    }
}
