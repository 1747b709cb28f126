//! English noun inflection for snake_case resource names.
//!
//! Only the last `_`-separated word is inflected, so `line_item` pluralizes
//! to `line_items`. Words that are already in the target form are returned
//! unchanged (`products` stays `products` when pluralized).

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
    "news",
    "metadata",
    "feedback",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
    ("ox", "oxen"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
];

/// Return the plural form of a snake_case word.
pub fn pluralize(word: &str) -> String {
    inflect_last_segment(word, pluralize_word)
}

/// Return the singular form of a snake_case word.
pub fn singularize(word: &str) -> String {
    inflect_last_segment(word, singularize_word)
}

fn inflect_last_segment(word: &str, inflect: fn(&str) -> String) -> String {
    match word.rsplit_once('_') {
        Some((head, last)) if !last.is_empty() => format!("{}_{}", head, inflect(last)),
        _ => inflect(word),
    }
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, p)| *s == word || *p == word) {
        return plural.to_string();
    }

    if let Some(stem) = word.strip_suffix("quiz") {
        return format!("{stem}quizzes");
    }
    let latin = [("matrix", "matrices"), ("vertex", "vertices"), ("index", "indices")];
    for (suffix, replacement) in latin {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    if word.ends_with("sis") {
        return format!("{}ses", &word[..word.len() - 3]);
    }
    if word.ends_with("us") {
        return format!("{word}es");
    }
    if word.ends_with('x') || word.ends_with("ch") || word.ends_with("ss") || word.ends_with("sh") {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y')
        && ends_with_consonant_or_qu(stem)
    {
        return format!("{stem}ies");
    }
    if let Some(stem) = word.strip_suffix("fe")
        && !stem.ends_with('f')
    {
        return format!("{stem}ves");
    }
    if let Some(stem) = word.strip_suffix('f')
        && (stem.ends_with('l') || stem.ends_with('r'))
    {
        return format!("{stem}ves");
    }
    if let Some(stem) = word.strip_suffix('o')
        && takes_oes(stem)
    {
        return format!("{stem}oes");
    }
    if word.ends_with('s') {
        return word.to_string();
    }
    format!("{word}s")
}

fn singularize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(s, p)| *p == word || *s == word) {
        return singular.to_string();
    }

    if let Some(stem) = word.strip_suffix("quizzes") {
        return format!("{stem}quiz");
    }
    let latin = [("matrices", "matrix"), ("vertices", "vertex"), ("indices", "index")];
    for (suffix, replacement) in latin {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["sses", "shes", "ches", "xes"].iter().any(|suffix| word.ends_with(suffix)) {
            return stem.to_string();
        }
        // statuses, buses, campuses; but not houses or causes
        if let Some(head) = stem.strip_suffix("us")
            && ends_with_consonant_or_qu(head)
        {
            return stem.to_string();
        }
        if let Some(head) = stem.strip_suffix('o')
            && takes_oes(head)
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("ses")
        && ["ba", "cri", "the", "aly", "gno"].iter().any(|head| stem.ends_with(head))
    {
        return format!("{stem}sis");
    }
    if let Some(stem) = word.strip_suffix("ies")
        && !stem.is_empty()
        && ends_with_consonant_or_qu(stem)
    {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ves") {
        if stem.ends_with('l') || stem.ends_with('r') {
            return format!("{stem}f");
        }
        if stem.ends_with("ni") || stem.ends_with("wi") || stem.ends_with("li") {
            return format!("{stem}fe");
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn takes_oes(stem: &str) -> bool {
    ["buffal", "tomat", "potat", "her"].iter().any(|head| stem.ends_with(head))
}

fn ends_with_consonant_or_qu(stem: &str) -> bool {
    if stem.ends_with("qu") {
        return true;
    }
    match stem.chars().last() {
        Some(c) => !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'),
        None => false,
    }
}
