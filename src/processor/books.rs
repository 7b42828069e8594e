//! Book-name tables and resolution of schedule spellings onto them.

use tracing::warn;

/// Canonical names, Old Testament then New Testament. The position of a name
/// is also the position of the book in the corpus file.
#[rustfmt::skip]
pub const CANONICAL_BOOKS: [&str; 66] = [
    // Old Testament
    "創世記", "出埃及記", "利未記", "民數記", "申命記",
    "約書亞記", "士師記", "路得記", "撒母耳記上", "撒母耳記下",
    "列王紀上", "列王紀下", "歷代志上", "歷代志下", "以斯拉記",
    "尼希米記", "以斯帖記", "約伯記", "詩篇", "箴言",
    "傳道書", "雅歌", "以賽亞書", "耶利米書", "耶利米哀歌",
    "以西結書", "但以理書", "何西阿書", "約珥書", "阿摩司書",
    "俄巴底亞書", "約拿書", "彌迦書", "那鴻書", "哈巴谷書",
    "西番雅書", "哈該書", "撒迦利亞書", "瑪拉基書",
    // New Testament
    "馬太福音", "馬可福音", "路加福音", "約翰福音", "使徒行傳",
    "羅馬書", "哥林多前書", "哥林多後書", "加拉太書", "以弗所書",
    "腓立比書", "歌羅西書", "帖撒羅尼迦前書", "帖撒羅尼迦後書", "提摩太前書",
    "提摩太後書", "提多書", "腓利門書", "希伯來書", "雅各書",
    "彼得前書", "彼得後書", "約翰一書", "約翰二書", "約翰三書",
    "猶大書", "啟示錄",
];

/// Abbreviations and alternate renderings seen in hand-written schedules.
const ALIASES: &[(&str, &str)] = &[
    ("詩", "詩篇"),
    ("箴", "箴言"),
    ("創", "創世記"),
    ("帖前", "帖撒羅尼迦前書"),
    ("帖後", "帖撒羅尼迦後書"),
    ("約翰壹書", "約翰一書"),
    ("約翰貳書", "約翰二書"),
    ("約翰參書", "約翰三書"),
    ("約壹", "約翰一書"),
    ("約貳", "約翰二書"),
    ("約參", "約翰三書"),
];

/// Books with one chapter; a bare book name means chapter 1.
const SINGLE_CHAPTER_BOOKS: [&str; 5] = [
    "俄巴底亞書",
    "腓利門書",
    "約翰二書",
    "約翰三書",
    "猶大書",
];

/// Alias target for `name`, or `name` itself.
pub fn normalize(name: &str) -> &str {
    let name = name.trim();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

/// Whether `name` (after alias lookup) is a one-chapter book.
pub fn is_single_chapter(name: &str) -> bool {
    SINGLE_CHAPTER_BOOKS.contains(&normalize(name))
}

/// Map a book token onto its canonical position.
///
/// Tried in order: exact canonical name, alias table, then prefix match in
/// either direction. When several books share the prefix the first in
/// canonical order wins and the ambiguity is logged.
pub fn resolve(name: &str) -> Option<usize> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some(index) = position(name) {
        return Some(index);
    }

    let aliased = normalize(name);
    if aliased != name {
        if let Some(index) = position(aliased) {
            return Some(index);
        }
    }

    let candidates: Vec<usize> = CANONICAL_BOOKS
        .iter()
        .enumerate()
        .filter(|(_, book)| name.starts_with(**book) || book.starts_with(name))
        .map(|(i, _)| i)
        .collect();

    if candidates.len() > 1 {
        let names: Vec<&str> = candidates.iter().map(|&i| CANONICAL_BOOKS[i]).collect();
        warn!(
            "ambiguous book name `{}` matches {}; using {}",
            name,
            names.join(", "),
            names[0]
        );
    }

    candidates.first().copied()
}

fn position(name: &str) -> Option<usize> {
    CANONICAL_BOOKS.iter().position(|book| *book == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_resolve_in_order() {
        assert_eq!(resolve("創世記"), Some(0));
        assert_eq!(resolve("瑪拉基書"), Some(38));
        assert_eq!(resolve("馬太福音"), Some(39));
        assert_eq!(resolve("啟示錄"), Some(65));
    }

    #[test]
    fn alias_and_canonical_agree() {
        assert_eq!(resolve("帖前"), resolve("帖撒羅尼迦前書"));
        assert_eq!(resolve("約參"), Some(63));
        assert_eq!(resolve("詩"), Some(18));
    }

    #[test]
    fn prefix_match_in_both_directions() {
        // token is a prefix of a canonical name
        assert_eq!(resolve("啟示"), Some(65));
        // canonical name is a prefix of the token
        assert_eq!(resolve("羅馬書信"), Some(44));
    }

    #[test]
    fn ambiguous_prefix_takes_first_in_canonical_order() {
        assert_eq!(resolve("撒母耳記"), Some(8));
        assert_eq!(resolve("約翰"), Some(42));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(resolve("多馬福音"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn single_chapter_books_follow_aliases() {
        assert!(is_single_chapter("猶大書"));
        assert!(is_single_chapter("約貳"));
        assert!(!is_single_chapter("約翰一書"));
        assert!(!is_single_chapter("創世記"));
    }

    #[test]
    fn canonical_table_has_no_duplicates() {
        for (i, name) in CANONICAL_BOOKS.iter().enumerate() {
            assert_eq!(position(name), Some(i), "{name} is duplicated");
        }
        assert_eq!(CANONICAL_BOOKS[19], "箴言");
    }
}
