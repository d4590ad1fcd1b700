mod common;
mod cors;
mod health;
mod invalid_json;
mod submit;
