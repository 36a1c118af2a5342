use serde::{Deserialize, Serialize};

/// Error body returned by the backend.
///
/// The backend is not consistent about where it puts the human readable message: handwritten
/// views use `message`, framework-generated errors use `detail`, and some proxies answer with
/// `error`. All three are optional so that any JSON object deserializes.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorDto {
    /// Returns the first non-empty message field, in `message`, `detail`, `error` order.
    pub fn into_message(self) -> Option<String> {
        [self.message, self.detail, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginatedDto<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// List endpoints answer with a paginated envelope when pagination is enabled on the backend and
/// with a bare array otherwise.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ListDto<T> {
    Paginated(PaginatedDto<T>),
    Plain(Vec<T>),
}

impl<T> ListDto<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListDto::Paginated(page) => page.results,
            ListDto::Plain(items) => items,
        }
    }
}

/// Body of the approve/reject actions, e.g. `{"status": "approved"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusDto {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_message_over_detail() {
        let dto: ErrorDto =
            serde_json::from_value(json!({ "detail": "Not found.", "message": "Club not found" }))
                .unwrap();

        assert_eq!(dto.into_message().as_deref(), Some("Club not found"));
    }

    #[test]
    fn skips_blank_messages() {
        let dto: ErrorDto =
            serde_json::from_value(json!({ "message": "  ", "detail": "Not found." })).unwrap();

        assert_eq!(dto.into_message().as_deref(), Some("Not found."));
    }

    #[test]
    fn field_errors_have_no_message() {
        let dto: ErrorDto =
            serde_json::from_value(json!({ "name": ["This field is required."] })).unwrap();

        assert_eq!(dto.into_message(), None);
    }

    #[test]
    fn list_accepts_both_shapes() {
        let page: ListDto<i32> =
            serde_json::from_value(json!({ "count": 2, "next": null, "results": [1, 2] })).unwrap();
        let plain: ListDto<i32> = serde_json::from_value(json!([3])).unwrap();

        assert_eq!(page.into_vec(), vec![1, 2]);
        assert_eq!(plain.into_vec(), vec![3]);
    }
}
