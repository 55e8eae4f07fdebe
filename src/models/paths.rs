use camino::{Utf8Path, Utf8PathBuf};

macro_rules! define_paths {
    ($name:ident { $($field:ident : $default:expr),* $(,)? }) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: Utf8PathBuf,)*
        }

        impl $name {
            pub fn to_absolute(mut self, base: &Utf8Path) -> Self {
                $(self.$field = base.join(self.$field);)*
                self
            }

            pub fn new(base: &Utf8Path) -> Self {
                Self::default().to_absolute(base)
            }

            /// All paths in declaration order.
            pub fn ordered(&self) -> Vec<&Utf8PathBuf> {
                vec![$(&self.$field,)*]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.into(),)*
                }
            }
        }
    };
}

// Probe order matters: the first existing candidate is the library.
define_paths!(SteamLibraryCandidates {
    native: ".steam/steam/steamapps",
    legacy: ".local/share/Steam/steamapps",
    flatpak: ".var/app/com.valvesoftware.Steam/.local/share/Steam/steamapps",
});

define_paths!(LibPathRules {
    workshop: "workshop/content",
    game: "common/DayZ",
});

impl LibPathRules {
    /// Layout of a located library, with the game folder taken from settings.
    pub fn for_library(library: &Utf8Path, game_dir: &str) -> Self {
        Self {
            game: game_dir.into(),
            ..Self::default()
        }
        .to_absolute(library)
    }

    /// `<library>/workshop/content/<app-id>/<mod-id>`
    pub fn workshop_item(&self, app_id: u32, mod_id: u64) -> Utf8PathBuf {
        self.workshop
            .join(app_id.to_string())
            .join(mod_id.to_string())
    }
}

/// Name of the installed directory for a mod, `@<name>`.
pub fn installed_dir_name(mod_name: &str) -> String {
    format!("{}{}", INSTALLED_MOD_PREFIX, mod_name)
}

/// Marks a directory in the game root as managed by us.
pub const INSTALLED_MOD_PREFIX: char = '@';
