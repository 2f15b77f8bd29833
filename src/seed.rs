// ABOUTME: Built-in Portuguese to English food table used to seed the term mapper
// ABOUTME: Entries are grouped by food category and kept in their canonical order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Seed Table
//!
//! The fixed food vocabulary the mapper starts with. Order matters: the
//! fallback substring scan returns the first entry that matches, so compound
//! keys such as `arroz branco` are listed before the bare `arroz` they contain.
//!
//! A few keys appear in more than one category (`pudim`, `inhame`). Seeding
//! applies entries in order, so such a key keeps the position of its first
//! occurrence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Food category a seed entry was filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Cereals, grains, and flours
    Grains,
    /// Meat, fish, eggs, and cheese
    Proteins,
    /// Fruits
    Fruits,
    /// Vegetables and greens
    Vegetables,
    /// Milk products
    Dairy,
    /// Cooking fats and oils
    FatsAndOils,
    /// Drinks
    Beverages,
    /// Snacks, desserts, and sugars
    SnacksAndSweets,
    /// Beans, pulses, and nuts
    LegumesAndNuts,
    /// Root vegetables
    Tubers,
    /// Spices, herbs, and sauces
    Seasonings,
}

impl FoodCategory {
    /// All categories in seed order
    pub const ALL: [Self; 11] = [
        Self::Grains,
        Self::Proteins,
        Self::Fruits,
        Self::Vegetables,
        Self::Dairy,
        Self::FatsAndOils,
        Self::Beverages,
        Self::SnacksAndSweets,
        Self::LegumesAndNuts,
        Self::Tubers,
        Self::Seasonings,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grains => "Grains",
            Self::Proteins => "Proteins",
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::Dairy => "Dairy",
            Self::FatsAndOils => "Fats and Oils",
            Self::Beverages => "Beverages",
            Self::SnacksAndSweets => "Snacks and Sweets",
            Self::LegumesAndNuts => "Legumes and Nuts",
            Self::Tubers => "Tubers",
            Self::Seasonings => "Seasonings",
        }
    }

    /// Raw `(source, target)` pairs filed under this category
    #[must_use]
    pub const fn pairs(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Grains => GRAINS,
            Self::Proteins => PROTEINS,
            Self::Fruits => FRUITS,
            Self::Vegetables => VEGETABLES,
            Self::Dairy => DAIRY,
            Self::FatsAndOils => FATS_AND_OILS,
            Self::Beverages => BEVERAGES,
            Self::SnacksAndSweets => SNACKS_AND_SWEETS,
            Self::LegumesAndNuts => LEGUMES_AND_NUTS,
            Self::Tubers => TUBERS,
            Self::Seasonings => SEASONINGS,
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the seed table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedEntry {
    /// Category the row is filed under
    pub category: FoodCategory,
    /// Portuguese phrase, already in normalized form
    pub source: &'static str,
    /// English phrase
    pub target: &'static str,
}

/// Iterate the built-in table in seed order, duplicates included
pub fn builtin_entries() -> impl Iterator<Item = SeedEntry> {
    FoodCategory::ALL.into_iter().flat_map(|category| {
        category
            .pairs()
            .iter()
            .map(move |&(source, target)| SeedEntry {
                category,
                source,
                target,
            })
    })
}

const GRAINS: &[(&str, &str)] = &[
    ("arroz branco", "white rice"),
    ("arroz integral", "brown rice"),
    ("arroz", "rice"),
    ("aveia", "oats"),
    ("quinoa", "quinoa"),
    ("pão integral", "whole wheat bread"),
    ("pão", "bread"),
    ("macarrão", "pasta"),
    ("massa", "pasta"),
    ("cereal", "cereal"),
    ("granola", "granola"),
    ("trigo", "wheat"),
    ("cevada", "barley"),
    ("centeio", "rye"),
    ("milho", "corn"),
    ("farinha", "flour"),
    ("farinha de trigo", "wheat flour"),
    ("farinha de aveia", "oat flour"),
];

const PROTEINS: &[(&str, &str)] = &[
    ("frango", "chicken"),
    ("peito de frango", "chicken breast"),
    ("coxa de frango", "chicken thigh"),
    ("sobrecoxa", "chicken drumstick"),
    ("carne bovina", "beef"),
    ("carne de vaca", "beef"),
    ("carne", "meat"),
    ("bife", "steak"),
    ("alcatra", "sirloin"),
    ("patinho", "bottom round"),
    ("músculo", "shank"),
    ("costela", "ribs"),
    ("porco", "pork"),
    ("lombo de porco", "pork loin"),
    ("bacon", "bacon"),
    ("linguiça", "sausage"),
    ("salsicha", "sausage"),
    ("peixe", "fish"),
    ("salmão", "salmon"),
    ("atum", "tuna"),
    ("bacalhau", "cod"),
    ("tilápia", "tilapia"),
    ("pescada", "hake"),
    ("sardinha", "sardine"),
    ("camarão", "shrimp"),
    ("lagosta", "lobster"),
    ("caranguejo", "crab"),
    ("polvo", "octopus"),
    ("lula", "squid"),
    ("ovo", "egg"),
    ("ovos", "eggs"),
    ("clara de ovo", "egg white"),
    ("gema", "egg yolk"),
    ("queijo", "cheese"),
    ("queijo minas", "minas cheese"),
    ("queijo prato", "prato cheese"),
    ("queijo mussarela", "mozzarella cheese"),
    ("queijo parmesão", "parmesan cheese"),
    ("queijo cheddar", "cheddar cheese"),
    ("requeijão", "cream cheese"),
    ("ricota", "ricotta cheese"),
    ("cottage", "cottage cheese"),
];

const FRUITS: &[(&str, &str)] = &[
    ("banana", "banana"),
    ("maçã", "apple"),
    ("laranja", "orange"),
    ("limão", "lemon"),
    ("lima", "lime"),
    ("uva", "grape"),
    ("morango", "strawberry"),
    ("abacaxi", "pineapple"),
    ("manga", "mango"),
    ("pêssego", "peach"),
    ("pêra", "pear"),
    ("kiwi", "kiwi"),
    ("melancia", "watermelon"),
    ("melão", "melon"),
    ("abacate", "avocado"),
    ("coco", "coconut"),
    ("tangerina", "tangerine"),
    ("acerola", "acerola"),
    ("caju", "cashew"),
    ("goiaba", "guava"),
    ("maracujá", "passion fruit"),
    ("açaí", "acai"),
    ("cajá", "caja"),
    ("jabuticaba", "jabuticaba"),
];

const VEGETABLES: &[(&str, &str)] = &[
    ("tomate", "tomato"),
    ("cebola", "onion"),
    ("alho", "garlic"),
    ("cenoura", "carrot"),
    ("batata", "potato"),
    ("batata doce", "sweet potato"),
    ("mandioca", "cassava"),
    ("inhame", "yam"),
    ("brócolis", "broccoli"),
    ("couve", "kale"),
    ("espinafre", "spinach"),
    ("alface", "lettuce"),
    ("rúcula", "arugula"),
    ("agrião", "watercress"),
    ("repolho", "cabbage"),
    ("couve-flor", "cauliflower"),
    ("berinjela", "eggplant"),
    ("abobrinha", "zucchini"),
    ("pimentão", "bell pepper"),
    ("pimenta", "pepper"),
    ("pimentão vermelho", "red bell pepper"),
    ("pimentão verde", "green bell pepper"),
    ("pimentão amarelo", "yellow bell pepper"),
    ("pepino", "cucumber"),
    ("rabanete", "radish"),
    ("nabo", "turnip"),
    ("beterraba", "beet"),
    ("chuchu", "chayote"),
    ("quiabo", "okra"),
    ("jiló", "jilo"),
    ("maxixe", "maxixe"),
];

const DAIRY: &[(&str, &str)] = &[
    ("leite", "milk"),
    ("leite integral", "whole milk"),
    ("leite desnatado", "skim milk"),
    ("leite semidesnatado", "low fat milk"),
    ("iogurte", "yogurt"),
    ("iogurte natural", "natural yogurt"),
    ("iogurte grego", "greek yogurt"),
    ("coalhada", "curd"),
    ("manteiga", "butter"),
    ("margarina", "margarine"),
    ("creme de leite", "heavy cream"),
    ("chantilly", "whipped cream"),
    ("sorvete", "ice cream"),
    ("pudim", "pudding"),
    ("flan", "flan"),
];

const FATS_AND_OILS: &[(&str, &str)] = &[
    ("óleo", "oil"),
    ("óleo de soja", "soybean oil"),
    ("óleo de girassol", "sunflower oil"),
    ("óleo de canola", "canola oil"),
    ("óleo de milho", "corn oil"),
    ("azeite", "olive oil"),
    ("azeite de oliva", "olive oil"),
    ("azeite extra virgem", "extra virgin olive oil"),
    ("óleo de coco", "coconut oil"),
    ("banha", "lard"),
    ("gordura", "fat"),
];

const BEVERAGES: &[(&str, &str)] = &[
    ("água", "water"),
    ("suco", "juice"),
    ("suco de laranja", "orange juice"),
    ("suco de maçã", "apple juice"),
    ("suco de uva", "grape juice"),
    ("suco de limão", "lemon juice"),
    ("refrigerante", "soda"),
    ("coca-cola", "coca cola"),
    ("pepsi", "pepsi"),
    ("guaraná", "guarana"),
    ("fanta", "fanta"),
    ("sprite", "sprite"),
    ("cerveja", "beer"),
    ("vinho", "wine"),
    ("vinho tinto", "red wine"),
    ("vinho branco", "white wine"),
    ("café", "coffee"),
    ("chá", "tea"),
    ("chá verde", "green tea"),
    ("chá preto", "black tea"),
    ("chá de camomila", "chamomile tea"),
    ("mate", "mate"),
    ("chimarrão", "chimarrão"),
    ("energético", "energy drink"),
    ("red bull", "red bull"),
    ("monster", "monster"),
];

const SNACKS_AND_SWEETS: &[(&str, &str)] = &[
    ("biscoito", "cookie"),
    ("bolacha", "cracker"),
    ("bolo", "cake"),
    ("torta", "pie"),
    ("pudim", "pudding"),
    ("mousse", "mousse"),
    ("chocolate", "chocolate"),
    ("chocolate ao leite", "milk chocolate"),
    ("chocolate amargo", "dark chocolate"),
    ("chocolate branco", "white chocolate"),
    ("doce", "candy"),
    ("bala", "candy"),
    ("pirulito", "lollipop"),
    ("chiclete", "gum"),
    ("balas", "candies"),
    ("guloseimas", "sweets"),
    ("açúcar", "sugar"),
    ("açúcar refinado", "refined sugar"),
    ("açúcar mascavo", "brown sugar"),
    ("açúcar demerara", "demerara sugar"),
    ("mel", "honey"),
    ("açúcar cristal", "crystal sugar"),
];

const LEGUMES_AND_NUTS: &[(&str, &str)] = &[
    ("feijão", "beans"),
    ("feijão preto", "black beans"),
    ("feijão carioca", "pinto beans"),
    ("feijão branco", "white beans"),
    ("feijão fradinho", "black eyed peas"),
    ("feijão verde", "green beans"),
    ("lentilha", "lentils"),
    ("grão de bico", "chickpeas"),
    ("grão-de-bico", "chickpeas"),
    ("ervilha", "peas"),
    ("soja", "soybeans"),
    ("amendoim", "peanuts"),
    ("castanha", "chestnut"),
    ("castanha do pará", "brazil nuts"),
    ("nozes", "walnuts"),
    ("amêndoas", "almonds"),
    ("avelãs", "hazelnuts"),
    ("pistache", "pistachios"),
    ("macadâmia", "macadamia nuts"),
];

const TUBERS: &[(&str, &str)] = &[
    ("batata inglesa", "potato"),
    ("batata baroa", "parsnip"),
    ("cará", "yam"),
    ("inhame", "yam"),
];

const SEASONINGS: &[(&str, &str)] = &[
    ("sal", "salt"),
    ("pimenta do reino", "black pepper"),
    ("pimenta branca", "white pepper"),
    ("pimenta rosa", "pink pepper"),
    ("canela", "cinnamon"),
    ("cravo", "cloves"),
    ("noz moscada", "nutmeg"),
    ("gengibre", "ginger"),
    ("açafrão", "turmeric"),
    ("cominho", "cumin"),
    ("coentro", "cilantro"),
    ("salsa", "parsley"),
    ("manjericão", "basil"),
    ("orégano", "oregano"),
    ("tomilho", "thyme"),
    ("louro", "bay leaf"),
    ("vinagre", "vinegar"),
    ("vinagre balsâmico", "balsamic vinegar"),
    ("vinagre de maçã", "apple cider vinegar"),
    ("mostarda", "mustard"),
    ("ketchup", "ketchup"),
    ("maionese", "mayonnaise"),
    ("molho de tomate", "tomato sauce"),
    ("molho de soja", "soy sauce"),
    ("shoyu", "soy sauce"),
    ("molho inglês", "worcestershire sauce"),
    ("pimenta malagueta", "malagueta pepper"),
    ("pimenta dedo de moça", "finger pepper"),
    ("pimenta biquinho", "biquinho pepper"),
];
