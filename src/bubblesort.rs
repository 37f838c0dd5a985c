/// Sorts `items` in ascending order by repeatedly swapping adjacent pairs.
///
/// Stable. Stops early once a sweep makes no swap.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let mut end = items.len();
    let mut swapped = true;

    while swapped && end > 1 {
        swapped = false;

        for i in 1..end {
            if items[i - 1] > items[i] {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
        end -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sort_ints() {
        let mut items = [10, 323, 11, 35, 76, 2, 11, 393, 14];
        bubble_sort(&mut items);
        assert_eq!(items, [2, 10, 11, 11, 14, 35, 76, 323, 393]);
    }

    #[test]
    fn test_bubble_sort_strings() {
        let mut items = vec!["pear", "Apple", "fig", "apple", "10"];
        bubble_sort(&mut items);
        assert_eq!(items, vec!["10", "Apple", "apple", "fig", "pear"]);
    }

    #[test]
    fn test_bubble_sort_trivial() {
        let mut empty: [u8; 0] = [];
        bubble_sort(&mut empty);
        let mut single = [42];
        bubble_sort(&mut single);
        assert_eq!(single, [42]);
    }

    /// Orders by the first field only.
    #[derive(Debug, PartialEq, Eq)]
    struct Key(u8, char);

    impl PartialOrd for Key {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Key {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn test_bubble_sort_stable() {
        let mut items = [Key(2, 'a'), Key(1, 'b'), Key(2, 'c'), Key(1, 'd')];
        bubble_sort(&mut items);
        let order: Vec<char> = items.iter().map(|k| k.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }
}
