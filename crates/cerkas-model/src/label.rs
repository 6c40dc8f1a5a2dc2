//! Snake-case code helpers.

/// `order_item` -> `Order Item`.
///
/// Underscores become spaces and the first ASCII word character of every
/// word is upper-cased. Everything else is left alone.
#[must_use]
pub fn to_label(snake: &str) -> String {
    let mut label = String::with_capacity(snake.len());
    let mut at_word_start = true;
    for ch in snake.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if at_word_start && ch.is_ascii_alphanumeric() {
            label.push(ch.to_ascii_uppercase());
        } else {
            label.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(to_label("order_item"), "Order Item");
        assert_eq!(to_label("customer"), "Customer");
        assert_eq!(to_label("already Spaced"), "Already Spaced");
        assert_eq!(to_label(""), "");
        assert_eq!(to_label("_leading"), " Leading");
    }
}
