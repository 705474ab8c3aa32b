use serde::{Deserialize, Serialize};

pub mod state;

/// Backend origin. The demo backend is a fixed local address; there is no
/// runtime configuration surface.
pub const BACKEND_ORIGIN: &str = "http://localhost:5000";

/// Static path prefix under which the backend serves indexed images.
pub const UPLOADS_PREFIX: &str = "/uploads/animal2/";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimilarImage {
    pub image_path: String,
    pub image_name: String,
    pub similarity: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QueryResponse {
    pub similar_images: Vec<SimilarImage>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UploadResponse {
    pub message: String,
}

/// JSON body of the text search request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextQueryRequest {
    pub query: String,
}

/// Display URL for a result image: origin + static prefix + relative path.
pub fn result_image_url(image_path: &str) -> String {
    format!("{}{}{}", BACKEND_ORIGIN, UPLOADS_PREFIX, image_path)
}

/// Similarity scores are rendered with exactly two decimal places and a
/// percent suffix, whatever precision the backend sent.
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.2}%", similarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_always_two_decimals() {
        assert_eq!(format_similarity(87.0), "87.00%");
        assert_eq!(format_similarity(42.5), "42.50%");
        assert_eq!(format_similarity(91.2345), "91.23%");
        assert_eq!(format_similarity(0.0), "0.00%");
    }

    #[test]
    fn result_url_joins_origin_prefix_and_path() {
        assert_eq!(
            result_image_url("cat1.jpg"),
            "http://localhost:5000/uploads/animal2/cat1.jpg"
        );
    }

    #[test]
    fn query_response_wire_shape() {
        let json = r#"{"similar_images":[
            {"image_path":"cat1.jpg","image_name":"cat1","similarity":91.2345},
            {"image_path":"dog2.jpg","image_name":"dog2","similarity":87.0}
        ]}"#;
        let parsed: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.similar_images.len(), 2);
        assert_eq!(parsed.similar_images[0].image_name, "cat1");
        assert_eq!(parsed.similar_images[1].similarity, 87.0);
    }

    #[test]
    fn upload_response_wire_shape() {
        let parsed: UploadResponse =
            serde_json::from_str(r#"{"message":"Image uploaded and features stored successfully"}"#)
                .unwrap();
        assert_eq!(parsed.message, "Image uploaded and features stored successfully");
    }

    #[test]
    fn text_query_request_wire_shape() {
        let body = serde_json::to_string(&TextQueryRequest { query: "a cat".into() }).unwrap();
        assert_eq!(body, r#"{"query":"a cat"}"#);
    }
}
