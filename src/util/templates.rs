//! HTML page rendering with embedded handlebars templates.

use std::fmt::Debug;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{error, trace};

static HTML_500: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Campus Records | Error</title>
</head>
<body>
<h1>Internal Server Error</h1>
<p>(Error 500)</p>
<p>Something went wrong on our end. No further or more
helpful information is available about the problem.</p>
</body>
</html>"#;

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../../templates/partials/header.hbs")),
    ("footer", include_str!("../../templates/partials/footer.hbs")),
];

const PAGES: &[(&str, &str)] = &[
    ("index", include_str!("../../templates/index.hbs")),
    ("login", include_str!("../../templates/login.hbs")),
    ("register", include_str!("../../templates/register.hbs")),
    ("student", include_str!("../../templates/student.hbs")),
    ("faculty", include_str!("../../templates/faculty.hbs")),
    ("view_data", include_str!("../../templates/view_data.hbs")),
];

/// Response for failures that leave nothing sensible to render.
pub fn html_500() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(HTML_500)).into_response()
}

pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, *source)?;
        }
        Ok(Templates { registry })
    }

    pub fn render<S: Serialize>(&self, name: &str, data: &S) -> Result<String, handlebars::RenderError> {
        self.registry.render(name, data)
    }

    pub fn page<S>(&self, code: StatusCode, name: &str, data: &S) -> Response
    where
        S: Serialize + Debug,
    {
        trace!("page( {}, {:?}, ... ) called.", &code, name);

        match self.render(name, data) {
            Ok(body) => (code, Html(body)).into_response(),
            Err(e) => {
                error!("Error rendering template {:?} with data {:?}:\n{}", name, data, &e);
                html_500()
            }
        }
    }
}
