use file2src_core::Result;
use file2src_langs::Lang;

/// Resolve the dialect named on the command line.
pub fn resolve_lang(name: &str) -> Result<Lang> {
    file2src_langs::lookup(name)
}

/// Hint appended to an unsupported-dialect diagnostic.
pub fn unsupported_hint(name: &str) -> String {
    match suggest_language(name) {
        Some(suggestion) => format!("did you mean '{}'?", suggestion),
        None => "run 'file2src --list-langs' for the full list".to_string(),
    }
}

/// Suggest similar dialect names for typos.
pub fn suggest_language(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();
    file2src_langs::all()
        .into_iter()
        .flat_map(|lang| lang.aliases().iter().map(move |alias| (lang, *alias)))
        .map(|(lang, alias)| (lang, levenshtein(alias, &input_lower)))
        .filter(|&(_, distance)| distance <= 2)
        .min_by_key(|&(_, distance)| distance)
        .map(|(lang, _)| lang.name().to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
