//! # Operation Builders
//!
//! One builder per (scope, verb) pair, plus the shared `$ref`, body and path
//! parameter fragments they are assembled from.

use crate::domain::ResourceDescriptor;
use crate::swagger::models::{Operation, Parameter, Response, Schema};

const SUCCESS: &str = "operation has been successful";

/// `{"$ref": "#/definitions/<item_title>"}`.
pub fn ref_schema(rd: &ResourceDescriptor) -> Schema {
    Schema::reference(rd.definition_ref())
}

/// Body parameter carrying one document of the resource.
pub fn body_parameter(rd: &ResourceDescriptor) -> Parameter {
    Parameter::Body {
        name: rd.item_title.clone(),
        required: true,
        schema: ref_schema(rd),
    }
}

/// Path parameter identifying one document.
pub fn id_parameter(rd: &ResourceDescriptor, item_id: &str) -> Parameter {
    Parameter::Path {
        name: item_id.to_string(),
        required: true,
        description: format!("ID of the {}", rd.item_title),
        param_type: "string".into(),
        format: "objectid".into(),
    }
}

fn described(description: String) -> Response {
    Response {
        description,
        schema: None,
    }
}

/// `GET /<url>`
pub fn get_collection(rd: &ResourceDescriptor) -> Operation {
    let title = &rd.resource_title;
    Operation::ok(
        format!("Retrieves one or more {}", title),
        Vec::new(),
        Response {
            description: format!("An array of {}", title),
            schema: Some(Schema::array_of(ref_schema(rd))),
        },
    )
}

/// `POST /<url>`
pub fn post_collection(rd: &ResourceDescriptor) -> Operation {
    Operation::ok(
        format!("Stores one or more {}", rd.resource_title),
        vec![body_parameter(rd)],
        described(SUCCESS.into()),
    )
}

/// `DELETE /<url>`
pub fn delete_collection(rd: &ResourceDescriptor) -> Operation {
    Operation::ok(
        format!("Deletes all {}", rd.resource_title),
        Vec::new(),
        described(SUCCESS.into()),
    )
}

/// `GET /<url>/{id}`
pub fn get_item(rd: &ResourceDescriptor, item_id: &str) -> Operation {
    let title = &rd.item_title;
    Operation::ok(
        format!("Retrieves a {} document", title),
        vec![id_parameter(rd, item_id)],
        Response {
            description: format!("{} document fetched successfully", title),
            schema: Some(ref_schema(rd)),
        },
    )
}

/// `PUT /<url>/{id}`
pub fn put_item(rd: &ResourceDescriptor, item_id: &str) -> Operation {
    let title = &rd.item_title;
    Operation::ok(
        format!("Replaces a {} document", title),
        vec![id_parameter(rd, item_id), body_parameter(rd)],
        described(format!("{} document replaced successfully", title)),
    )
}

/// `PATCH /<url>/{id}`
pub fn patch_item(rd: &ResourceDescriptor, item_id: &str) -> Operation {
    let title = &rd.item_title;
    Operation::ok(
        format!("Updates a {} document", title),
        vec![id_parameter(rd, item_id), body_parameter(rd)],
        described(format!("{} document updated successfully", title)),
    )
}

/// `DELETE /<url>/{id}`
pub fn delete_item(rd: &ResourceDescriptor, item_id: &str) -> Operation {
    let title = &rd.item_title;
    Operation::ok(
        format!("Deletes a {} document", title),
        vec![id_parameter(rd, item_id)],
        described(format!("{} document deleted successfully", title)),
    )
}
