//! HTML templates, compiled into the binary.

use crate::AppResult;
use crate::media::media_url;

use acct_core::City;

use std::collections::HashMap;
use std::str::FromStr;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera, Value};

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    (
        "registration/signup.html",
        include_str!("../templates/registration/signup.html"),
    ),
    (
        "registration/login.html",
        include_str!("../templates/registration/login.html"),
    ),
    (
        "registration/password_change_form.html",
        include_str!("../templates/registration/password_change_form.html"),
    ),
    (
        "account/profile.html",
        include_str!("../templates/account/profile.html"),
    ),
    (
        "account/profile_edit.html",
        include_str!("../templates/account/profile_edit.html"),
    ),
];

pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        tera.register_filter("media_url", media_url_filter);
        tera.register_filter("city_label", city_label_filter);

        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> AppResult<Html<String>> {
        Ok(Html(self.tera.render(name, context)?))
    }
}

/// `{{ profile.image | media_url }}`
fn media_url_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    match value.as_str() {
        Some(relative) if !relative.is_empty() => Ok(Value::String(media_url(relative))),
        _ => Ok(Value::String(String::new())),
    }
}

/// `{{ profile.city | city_label }}`; unknown keys pass through unchanged
fn city_label_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let Some(key) = value.as_str() else {
        return Ok(Value::String(String::new()));
    };

    Ok(Value::String(match City::from_str(key) {
        Ok(city) => city.label().to_string(),
        Err(_) => key.to_string(),
    }))
}

/// One option of the city select widget
#[derive(Debug, Serialize)]
pub struct CityChoice {
    pub key: &'static str,
    pub label: &'static str,
}

pub fn city_choices() -> Vec<CityChoice> {
    City::ALL
        .iter()
        .map(|city| CityChoice {
            key: city.as_str(),
            label: city.label(),
        })
        .collect()
}
