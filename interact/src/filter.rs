// portfolio filter
//
// buttons carry a data-filter value, either "all" or a category that items
// list among their class tokens

pub const SHOW_CLASS: &str = "show";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("all") => Filter::All,
            Some(category) => Filter::Category(category.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category,
        }
    }

    pub fn shows(&self, item_classes: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => item_classes
                .split_ascii_whitespace()
                .any(|class| class == category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_all() {
        assert_eq!(Filter::parse(None), Filter::All);
        assert_eq!(Filter::parse(Some("all")), Filter::All);
        assert_eq!(Filter::parse(Some(" ")), Filter::All);
        assert_eq!(
            Filter::parse(Some("web")),
            Filter::Category(String::from("web"))
        );
    }

    #[test]
    fn category_matches_whole_class_tokens() {
        let web = Filter::Category(String::from("web"));

        assert!(web.shows("column web show"));
        assert!(!web.shows("column webapp"));
        assert!(!web.shows("column print"));
        assert!(Filter::All.shows("column print"));
    }
}
