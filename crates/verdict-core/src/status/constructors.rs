//! Constructor and convenience builders for Status

use super::cause::{BoxError, Cause};
use super::types::{
    CONTACT_SUPPORT_HELP, HelpMap, HelpType, MessageError, STATUS_BAD_REQUEST,
    STATUS_INTERNAL_SERVER_ERROR, STATUS_OK, Status, StatusArgs,
};

impl Status {
    /// Build a status, resolving every unset field to its default.
    ///
    /// - an empty message is taken from the cause's text
    /// - a failure without a cause gets one synthesized from the message
    /// - an http status of `0` becomes 500
    /// - empty `help` becomes [`CONTACT_SUPPORT_HELP`]; empty `api_help` and
    ///   `cli_help` fall back to the resolved `help`
    ///
    /// Construction never fails.
    pub fn new(args: StatusArgs) -> Self {
        let StatusArgs {
            success,
            warning,
            message,
            http_status,
            cause,
            data,
            help,
            api_help,
            cli_help,
        } = args;

        let mut status = Self {
            success: success || warning,
            warn: warning,
            http_status,
            message,
            details: String::new(),
            data,
            help: resolve_help(help, api_help, cli_help),
            error_code: 0,
            cause,
            log_class: None,
        };

        if status.message.is_empty() {
            if let Some(cause) = &status.cause {
                status.message = cause.to_string();
            }
        }

        status.ensure_failure_cause();

        if status.http_status == 0 {
            status.http_status = STATUS_INTERNAL_SERVER_ERROR;
        }

        status
    }

    /// Give a failure without a cause one built from its message
    pub(super) fn ensure_failure_cause(&mut self) {
        if !self.success && self.cause.is_none() {
            tracing::trace!(reason = %self.message, "synthesizing cause for failure");
            self.cause = Some(Cause::new(MessageError::new(self.message.clone())));
        }
    }

    /// Create a successful status (HTTP 200)
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusArgs {
            success: true,
            message: message.into(),
            http_status: STATUS_OK,
            ..Default::default()
        })
    }

    /// Create a success with a stock message
    pub fn simple_success() -> Self {
        Self::success("everything a-ok")
    }

    /// Create a warning: a success that needs attention
    pub fn warn(message: impl Into<String>) -> Self {
        Self::success(message).with_warn(true)
    }

    /// Create a failure from `args`, overriding any success or warning flag
    pub fn fail(args: StatusArgs) -> Self {
        Self::new(StatusArgs {
            success: false,
            warning: false,
            ..args
        })
    }

    /// Create a failure caused by the caller (HTTP 400)
    pub fn your_bad(message: impl Into<String>) -> Self {
        Self::fail(StatusArgs {
            message: message.into(),
            http_status: STATUS_BAD_REQUEST,
            ..Default::default()
        })
    }

    /// Create a failure caused by us (HTTP 500)
    pub fn our_bad(message: impl Into<String>) -> Self {
        Self::fail(StatusArgs {
            message: message.into(),
            http_status: STATUS_INTERNAL_SERVER_ERROR,
            ..Default::default()
        })
    }

    /// Wrap an error as the cause of a new status.
    ///
    /// Without a message in `args`, the error's text is used. Unless `args`
    /// says otherwise the result is a failure.
    pub fn wrap<E: Into<BoxError>>(error: E, args: Option<StatusArgs>) -> Self {
        let mut args = args.unwrap_or_default();
        let cause = Cause::new(error);
        if args.message.is_empty() {
            args.message = cause.to_string();
        }
        args.cause = Some(cause);
        Self::new(args)
    }
}

/// Resolve the three help slots from possibly-empty inputs
pub(super) fn resolve_help(help: String, api_help: String, cli_help: String) -> HelpMap {
    let all = if help.is_empty() {
        CONTACT_SUPPORT_HELP.to_string()
    } else {
        help
    };
    let api = if api_help.is_empty() {
        all.clone()
    } else {
        api_help
    };
    let cli = if cli_help.is_empty() {
        all.clone()
    } else {
        cli_help
    };
    HelpMap::from([(HelpType::All, all), (HelpType::Api, api), (HelpType::Cli, cli)])
}
