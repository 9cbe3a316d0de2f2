//! JSON 输出格式

use directlink_core::{ConversionMode, extract_file_id};
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub mode: ConversionMode,
    pub input_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    pub has_password: bool,
    pub output_url: String,
}

impl Conversion {
    pub fn new(mode: ConversionMode, input_url: &str, has_password: bool, output_url: String) -> Self {
        let file_id = match mode {
            ConversionMode::GoogleDrive => extract_file_id(input_url).map(str::to_string),
            ConversionMode::CustomDomain => None,
        };

        Self {
            mode,
            input_url: input_url.to_string(),
            file_id,
            has_password,
            output_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directlink_core::convert;

    #[test]
    fn test_json_shape() {
        let url = "https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing";
        let output = convert(ConversionMode::GoogleDrive, url, "hi");
        let conversion = Conversion::new(ConversionMode::GoogleDrive, url, true, output);

        let value = serde_json::to_value(&conversion).unwrap();
        assert_eq!(value["mode"], "google-drive");
        assert_eq!(value["fileId"], "1A2b3C4d5E");
        assert_eq!(value["hasPassword"], true);
        assert_eq!(
            value["outputUrl"],
            "https://drive.google.com/uc?export=download&id=1A2b3C4d5E#aGk="
        );
    }

    #[test]
    fn test_custom_domain_omits_file_id() {
        let url = "https://example.com/a/b";
        let conversion =
            Conversion::new(ConversionMode::CustomDomain, url, false, url.to_string());

        let json = serde_json::to_string(&conversion).unwrap();
        assert!(!json.contains("fileId"));
        assert!(json.contains("\"mode\":\"custom-domain\""));
    }
}
