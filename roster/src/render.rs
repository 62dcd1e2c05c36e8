//! Text rendering of the user list.

use std::fmt::{self, Display, Formatter};

use roster_model::user::{Uid, User};

use crate::config::AvatarPlacement;

/// Shown in place of initials for users without a name.
pub const UNKNOWN_BADGE: &str = "??";

/// Maps a user to a row.
pub fn render(user: &User, placement: AvatarPlacement) -> Row<'_> {
    Row { user, placement }
}

/// The key identifying a user's row.
///
/// This is always the key stored on the record, so it is the same on every
/// pass.
pub fn key(user: &User) -> &Uid {
    user.key()
}

/// A single rendered user.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    user: &'a User,
    placement: AvatarPlacement,
}

impl Display for Row<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let badge = Badge(self.user);
        let name = self.user.full_name();

        match (self.placement, name.is_empty()) {
            (_, true) => write!(f, "{}", badge),
            (AvatarPlacement::Leading, false) => write!(f, "{} {}", badge, name),
            (AvatarPlacement::Trailing, false) => write!(f, "{} {}", name, badge),
        }
    }
}

/// The avatar of a user.
///
/// Users with an image are drawn as `[initials]`, users without one as
/// `(initials)`.
struct Badge<'a>(&'a User);

impl Display for Badge<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let initials = self.0.initials();
        let initials = if initials.is_empty() {
            UNKNOWN_BADGE
        } else {
            initials.as_str()
        };

        match self.0.avatar {
            Some(_) => write!(f, "[{}]", initials),
            None => write!(f, "({})", initials),
        }
    }
}

/// The whole list, as drawn to the terminal.
#[derive(Clone, Copy, Debug)]
pub struct ListView<'a> {
    pub users: &'a [User],
    pub placement: AvatarPlacement,
    pub refreshing: bool,
    /// Print each avatar url under its row.
    pub show_avatars: bool,
}

impl Display for ListView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.refreshing {
            writeln!(f, "refreshing...")?;
        }

        if self.users.is_empty() {
            return writeln!(f, "no users");
        }

        for (i, user) in self.users.iter().enumerate() {
            writeln!(f, "{:>3}. {}", i + 1, render(user, self.placement))?;

            if let (true, Some(avatar)) = (self.show_avatars, &user.avatar) {
                writeln!(f, "     {}", avatar)?;
            }
        }

        Ok(())
    }
}
