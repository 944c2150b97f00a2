use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
///
/// When the request asked for `export_all`, `content` holds every matching
/// record and the backend may leave out `totalElements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
        }
    }
}

/// User-facing notification body returned by the backend on errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_reads_total_elements() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"content":[1,2],"totalElements":12}"#)
                .unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.total_elements, 12);
    }

    #[test]
    fn export_page_may_omit_total() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"content":[1,2,3]}"#).unwrap();
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn api_message_type_field() {
        let message: ApiMessage = serde_json::from_str(
            r#"{"message":"Not allowed","title":"Error","type":"error"}"#,
        )
        .unwrap();
        assert_eq!(message.kind.as_deref(), Some("error"));
    }
}
