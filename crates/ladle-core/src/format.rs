/// Title-case a filename stem for display: first letter of each word
/// upper-cased, the rest left alone.
pub fn display_name(stem: &str) -> String {
    stem.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_title_cases_each_word() {
        assert_eq!(display_name("tomato rice"), "Tomato Rice");
        assert_eq!(display_name("Rasam"), "Rasam");
    }

    #[test]
    fn display_name_keeps_inner_capitals() {
        assert_eq!(display_name("BBQ chicken"), "BBQ Chicken");
    }
}
