// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new/choose";

#[must_use]
pub fn goodbye_msg(maybe_user_name: Option<&str>) -> String {
    match maybe_user_name {
        Some(user_name) => format!("Goodbye, {user_name}. Thanks for using quill!"),
        None => "Thanks for using quill!".to_string(),
    }
}
