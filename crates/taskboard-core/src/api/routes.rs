//! REST Routes
//!
//! Paths of the external API, relative to the configured base URL.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::domain::TaskId;

pub const REGISTER: &str = "/api/users/register";
pub const LOGIN: &str = "/api/users/login";
pub const GOOGLE: &str = "/api/users/google";
pub const TASKS: &str = "/api/tasks";

/// Characters that cannot appear raw in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `/api/tasks/:id` for edit and delete
pub fn task(id: &TaskId) -> String {
    format!("{}/{}", TASKS, utf8_percent_encode(id.as_str(), PATH_SEGMENT))
}
