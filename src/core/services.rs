use crate::core::JqError;

type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// The two unauthenticated calls the token manager depends on.
///
/// This decouples the token state machine from HTTP, making it easier to test. It is
/// implemented by [`crate::JqClient`].
pub(crate) trait TokenEndpoint: Send + Sync {
    /// Logs in with a mail address and password and returns a fresh refresh token.
    fn login<'a>(
        &'a self,
        mail_address: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<String, JqError>>;

    /// Exchanges a refresh token for a fresh id token.
    ///
    /// A rejected exchange must be reported as [`JqError::Status`] carrying the HTTP status.
    fn exchange<'a>(&'a self, refresh_token: &'a str) -> BoxFuture<'a, Result<String, JqError>>;
}
