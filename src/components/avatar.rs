//! Avatar Component
//!
//! Profile picture with an initials fallback when no image is set.

use leptos::prelude::*;

use crate::format::initials;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    XLarge,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar-sm",
            AvatarSize::Medium => "avatar-md",
            AvatarSize::XLarge => "avatar-xl",
        }
    }
}

#[component]
pub fn Avatar(
    #[prop(optional_no_strip)] src: Option<String>,
    #[prop(into)] name: String,
    #[prop(optional)] size: AvatarSize,
) -> impl IntoView {
    match src {
        Some(url) => view! {
            <img class=format!("avatar {}", size.class()) src=url alt=name />
        }
        .into_any(),
        None => view! {
            <div class=format!("avatar avatar-initials {}", size.class())>
                {initials(&name)}
            </div>
        }
        .into_any(),
    }
}
