//! Parameterized greeting resources (`greeting://{name}`, `farewell://{name}`).
use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceContents, ResourceTemplate};

use crate::lib::errors::ResourceError;

const NAME_PLACEHOLDER: &str = "{name}";
const TEXT_MIME_TYPE: &str = "text/plain";

/// Binding of a URI template to the function that renders it.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTemplateSpec {
    pub name: &'static str,
    pub uri_template: &'static str,
    pub description: &'static str,
    pub render: fn(&str) -> String,
}

impl ResourceTemplateSpec {
    /// Extract the `{name}` segment when `uri` matches this template.
    pub fn match_uri<'a>(&self, uri: &'a str) -> Option<&'a str> {
        let (prefix, suffix) = self.uri_template.split_once(NAME_PLACEHOLDER)?;
        let name = uri.strip_prefix(prefix)?.strip_suffix(suffix)?;
        if name.is_empty() || name.contains('/') {
            return None;
        }
        Some(name)
    }

    /// MCP descriptor for `resources/templates/list`.
    pub fn descriptor(&self) -> ResourceTemplate {
        RawResourceTemplate {
            uri_template: self.uri_template.to_string(),
            name: self.name.to_string(),
            title: None,
            description: Some(self.description.to_string()),
            mime_type: Some(TEXT_MIME_TYPE.to_string()),
        }
        .no_annotation()
    }
}

pub const RESOURCE_TEMPLATES: &[ResourceTemplateSpec] = &[
    ResourceTemplateSpec {
        name: "get_greeting",
        uri_template: "greeting://{name}",
        description: "Get a personalized greeting message for the given name",
        render: get_greeting,
    },
    ResourceTemplateSpec {
        name: "get_farewell",
        uri_template: "farewell://{name}",
        description: "Get a personalized farewell message for the given name",
        render: get_farewell,
    },
];

pub fn get_greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

pub fn get_farewell(name: &str) -> String {
    format!("Goodbye, {name}! See you soon.")
}

/// Text produced for a concrete resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub template: &'static str,
    pub uri: String,
    pub text: String,
}

impl ResolvedResource {
    /// Text contents tagged with the MIME type the template advertises.
    pub fn into_contents(self) -> ResourceContents {
        ResourceContents::TextResourceContents {
            uri: self.uri,
            mime_type: Some(TEXT_MIME_TYPE.to_string()),
            text: self.text,
            meta: None,
        }
    }
}

/// Resolve `uri` against the template table.
pub fn read_resource(uri: &str) -> Result<ResolvedResource, ResourceError> {
    RESOURCE_TEMPLATES
        .iter()
        .find_map(|spec| {
            spec.match_uri(uri).map(|name| ResolvedResource {
                template: spec.uri_template,
                uri: uri.to_string(),
                text: (spec.render)(name),
            })
        })
        .ok_or_else(|| ResourceError::UnknownUri {
            uri: uri.to_string(),
        })
}

/// Descriptors for every registered template.
pub fn list_templates() -> Vec<ResourceTemplate> {
    RESOURCE_TEMPLATES
        .iter()
        .map(ResourceTemplateSpec::descriptor)
        .collect()
}
