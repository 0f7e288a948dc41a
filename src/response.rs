//! The `{message, data}` envelope every endpoint answers with.

use std::borrow::Cow;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct Envelope<T> {
    pub(crate) message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<T>,
}

impl<T> Envelope<T> {
    pub(crate) fn with_data(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Envelope {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// An envelope carrying only a message, e.g. for errors.
    pub(crate) fn bare(message: impl Into<Cow<'static, str>>) -> Self {
        Envelope {
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn data_is_omitted_when_absent() {
        let value = serde_json::to_value(Envelope::bare("nope")).unwrap();
        assert_eq!(value, json!({ "message": "nope" }));
    }

    #[test]
    fn empty_list_is_kept() {
        let value = serde_json::to_value(Envelope::with_data("ok", Vec::<u8>::new())).unwrap();
        assert_eq!(value, json!({ "message": "ok", "data": [] }));
    }
}
