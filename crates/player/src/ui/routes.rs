//! Route table
//!
//! Everything sits under [`RedirectListener`] so a session that cannot be
//! refreshed lands on the sign-in page from any screen. Routes under
//! [`Protected`] render only for a signed-in user.

use dioxus::prelude::*;

use super::layouts::{Protected, RedirectListener};
use super::pages::{GameList, Home, NotFound, Profile, SignIn, SignUp, UserList};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RedirectListener)]
        #[route("/signup")]
        SignUp {},
        #[route("/signin")]
        SignIn {},
        #[layout(Protected)]
            #[route("/")]
            Home {},
            #[route("/game")]
            GameList {},
            #[route("/profile")]
            Profile {},
            #[route("/user")]
            UserList {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
