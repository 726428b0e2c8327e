/// Query parameters sent to the release feed endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    pub image_type: String,
    pub vendor: String,
    pub heap_size: String,
    pub page_size: u32,
}

impl ReleaseQuery {
    pub fn new(image_type: String, vendor: String, heap_size: String, page_size: u32) -> Self {
        Self {
            image_type,
            vendor,
            heap_size,
            page_size,
        }
    }

    /// Query pairs in the order the feed documents them
    pub fn as_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("image_type", self.image_type.clone()),
            ("vendor", self.vendor.clone()),
            ("heap_size", self.heap_size.clone()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_params() {
        let query = ReleaseQuery::new(
            "sbom".to_string(),
            "eclipse".to_string(),
            "normal".to_string(),
            20,
        );
        assert_eq!(
            query.as_params(),
            vec![
                ("image_type", "sbom".to_string()),
                ("vendor", "eclipse".to_string()),
                ("heap_size", "normal".to_string()),
                ("page_size", "20".to_string()),
            ]
        );
    }
}
