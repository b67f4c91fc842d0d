//! Portuguese color-name vocabulary.
//!
//! Keys are lowercase and trimmed; lookups must normalize their input the
//! same way before calling [`lookup_hex`].

/// `(name, hex)` pairs grouped by color family.
pub const COLOR_NAMES: &[(&str, &str)] = &[
    // Neutros
    ("preto", "#000000"),
    ("branco", "#FFFFFF"),
    ("branco gelo", "#F8F8FF"),
    ("off-white", "#FAF9F6"),
    ("cinza", "#808080"),
    ("cinza claro", "#D3D3D3"),
    ("cinza escuro", "#A9A9A9"),
    ("cinza chumbo", "#36454F"),
    ("grafite", "#41424C"),
    ("prata", "#C0C0C0"),
    ("bege", "#F5F5DC"),
    ("creme", "#FFFDD0"),
    ("marfim", "#FFFFF0"),
    ("areia", "#C2B280"),
    ("taupe", "#483C32"),
    // Azuis
    ("azul", "#0000FF"),
    ("azul marinho", "#000080"),
    ("marinho", "#000080"),
    ("azul royal", "#4169E1"),
    ("azul claro", "#ADD8E6"),
    ("azul bebê", "#89CFF0"),
    ("azul céu", "#87CEEB"),
    ("azul petróleo", "#005F6A"),
    ("azul cobalto", "#0047AB"),
    ("azul gelo", "#E0FFFF"),
    ("turquesa", "#40E0D0"),
    ("ciano", "#00FFFF"),
    ("índigo", "#4B0082"),
    // Vermelhos e rosas
    ("vermelho", "#FF0000"),
    ("vermelho cereja", "#DE3163"),
    ("carmim", "#960018"),
    ("bordô", "#800020"),
    ("vinho", "#722F37"),
    ("rosa", "#FFC0CB"),
    ("rosa claro", "#FFB6C1"),
    ("rosa choque", "#FF1493"),
    ("pink", "#FF69B4"),
    ("fúcsia", "#FF00FF"),
    ("magenta", "#FF00FF"),
    ("coral", "#FF7F50"),
    ("salmão", "#FA8072"),
    ("rosa antigo", "#C08081"),
    // Verdes
    ("verde", "#008000"),
    ("verde escuro", "#006400"),
    ("verde claro", "#90EE90"),
    ("verde oliva", "#808000"),
    ("oliva", "#808000"),
    ("verde musgo", "#8A9A5B"),
    ("verde militar", "#4B5320"),
    ("verde esmeralda", "#50C878"),
    ("esmeralda", "#50C878"),
    ("verde menta", "#98FF98"),
    ("menta", "#98FF98"),
    ("verde água", "#66CDAA"),
    ("verde limão", "#32CD32"),
    ("verde garrafa", "#006A4E"),
    // Amarelos e laranjas
    ("amarelo", "#FFFF00"),
    ("amarelo claro", "#FFFFE0"),
    ("amarelo mostarda", "#FFDB58"),
    ("mostarda", "#FFDB58"),
    ("dourado", "#FFD700"),
    ("ouro", "#FFD700"),
    ("laranja", "#FFA500"),
    ("laranja queimado", "#CC5500"),
    ("pêssego", "#FFDAB9"),
    ("damasco", "#FBCEB1"),
    ("terracota", "#E2725B"),
    // Roxos
    ("roxo", "#800080"),
    ("lilás", "#C8A2C8"),
    ("lavanda", "#E6E6FA"),
    ("violeta", "#8F00FF"),
    ("ameixa", "#8E4585"),
    ("berinjela", "#614051"),
    ("uva", "#6F2DA8"),
    // Marrons
    ("marrom", "#8B4513"),
    ("marrom claro", "#A0522D"),
    ("marrom escuro", "#654321"),
    ("caramelo", "#C68E17"),
    ("chocolate", "#7B3F00"),
    ("café", "#6F4E37"),
    ("camelo", "#C19A6B"),
    ("caqui", "#C3B091"),
    ("ferrugem", "#B7410E"),
    ("cobre", "#B87333"),
    // Diversos
    ("nude", "#E3BC9A"),
    ("champagne", "#F7E7CE"),
    ("jeans", "#5D8AA8"),
    ("denim", "#1560BD"),
];

/// Look up the hex value for an already lowercased, trimmed name.
pub fn lookup_hex(key: &str) -> Option<&'static str> {
    COLOR_NAMES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, hex)| *hex)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
