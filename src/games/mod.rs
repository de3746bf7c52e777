//! Games with encounter data, and how each one is assembled.

mod red_blue;

pub use red_blue::{RED_BLUE_LOCATION_ORDER, red_blue_transformers};

use crate::encounters::{GameInfo, TransformerFactory};

/// Everything needed to build the encounters document of one game.
#[derive(Clone, Copy)]
pub struct GameDefinition {
    pub info: GameInfo,
    pub location_order: &'static [&'static str],
    pub transformers: TransformerFactory,
}

pub const GAMES: &[GameDefinition] = &[
    GameDefinition {
        info: GameInfo {
            id: "red",
            name: "Pokémon Red",
        },
        location_order: RED_BLUE_LOCATION_ORDER,
        transformers: red_blue_transformers,
    },
    GameDefinition {
        info: GameInfo {
            id: "blue",
            name: "Pokémon Blue",
        },
        location_order: RED_BLUE_LOCATION_ORDER,
        transformers: red_blue_transformers,
    },
];

pub fn find_game(id: &str) -> Option<&'static GameDefinition> {
    GAMES.iter().find(|game| game.info.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_game() {
        assert_eq!(find_game("red").unwrap().info.name, "Pokémon Red");
        assert_eq!(find_game("blue").unwrap().info.name, "Pokémon Blue");
        assert!(find_game("gold").is_none());
    }
}
