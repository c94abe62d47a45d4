use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub home_url: Option<String>,
}

impl NewProduct {
    pub fn has_required_fields(&self) -> bool {
        self.name.is_some()
            && self.description.is_some()
            && self.product_type.is_some()
            && self.category.is_some()
    }

    /// Catalog Products v1 create payload; optional URLs are only
    /// attached when present.
    pub fn into_payload(self) -> Value {
        let mut payload = json!({
            "name": self.name,
            "description": self.description,
            "type": self.product_type,
            "category": self.category,
        });

        if let Some(image_url) = self.image_url {
            payload["image_url"] = json!(image_url);
        }
        if let Some(home_url) = self.home_url {
            payload["home_url"] = json!(home_url);
        }

        payload
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductUpdate {
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub home_url: Option<String>,
}

impl ProductUpdate {
    /// JSON-Patch `replace` operations for the fields the caller supplied.
    pub fn patch_ops(&self) -> Vec<Value> {
        let mut operations = Vec::new();

        if let Some(description) = &self.description {
            operations.push(replace_op("/description", description));
        }
        if let Some(category) = &self.category {
            operations.push(replace_op("/category", category));
        }
        if let Some(image_url) = &self.image_url {
            operations.push(replace_op("/image_url", image_url));
        }
        if let Some(home_url) = &self.home_url {
            operations.push(replace_op("/home_url", home_url));
        }

        operations
    }
}

fn replace_op(path: &str, value: &str) -> Value {
    json!({
        "op": "replace",
        "path": path,
        "value": value,
    })
}
