//! Application Error - Unified error type for the client
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// クライアント全体で使用する標準エラー型です。
/// ビルダーパターンを使用してエラーを構築できます。
///
/// ## Fields
/// * `kind` - エラーの分類（提示方法にマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `action` - ユーザーが取るべきアクション（オプション）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::RequestFailure, "Invalid credentials")
///     .with_action("Check your email and password, then sign in again");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// ユーザー向けアクションを設定
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを設定（デバッグ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// ユーザーに表示すべきかどうか
    #[inline]
    pub fn is_user_facing(&self) -> bool {
        self.kind.is_user_facing()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// `Result<T, E>` を `AppResult<T>` に変換するための拡張トレイト
pub trait ResultExt<T, E> {
    /// エラーを `AppError` に変換し、指定した種別とメッセージでラップ
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| AppError::new(kind, message).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::RequestFailure, "Request failed");
        assert_eq!(err.kind(), ErrorKind::RequestFailure);
        assert_eq!(err.message(), "Request failed");
        assert!(err.action().is_none());
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_with_action() {
        let err = AppError::new(ErrorKind::RequestFailure, "Invalid credentials").with_action("Please try again");
        assert_eq!(err.action(), Some("Please try again"));
        assert!(err.to_string().contains("Action:"));
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::other("disk full");
        let err = AppError::new(ErrorKind::StorageFailure, "Failed to persist session").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = AppError::new(ErrorKind::ValidationFailure, "Passwords do not match");
        assert_eq!(err.to_string(), "[Validation Failure] Passwords do not match");
    }

    #[test]
    fn test_result_ext() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::other("boom"));
        let app_result = result.map_app_err(ErrorKind::StorageFailure, "Storage unavailable");
        assert_eq!(app_result.unwrap_err().kind(), ErrorKind::StorageFailure);
    }
}
