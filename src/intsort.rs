use crate::SortError;

/// Sorts `values` with a binary LSD radix sort.
///
/// Runs one pass per bit up to the highest set bit of the largest value.
/// Each pass moves the values with the bit clear in front of those with the
/// bit set, keeping their order. On [`SortError::Allocation`] `values` is
/// left untouched.
pub fn radix_sort_u64(values: &mut [u64]) -> Result<(), SortError> {
    let largest = values.iter().copied().max().unwrap_or(0);
    let n_bits = (u64::BITS - largest.leading_zeros()) as usize;
    if n_bits == 0 {
        return Ok(());
    }

    let mut zeros = Vec::new();
    zeros.try_reserve_exact(values.len())?;
    let mut ones = Vec::new();
    ones.try_reserve_exact(values.len())?;

    log::debug!("Sorting {} integers in {} passes", values.len(), n_bits);
    for bit in 0..n_bits {
        let mask = 1u64 << bit;
        for &v in values.iter() {
            if v & mask == 0 {
                zeros.push(v);
            } else {
                ones.push(v);
            }
        }
        let (head, tail) = values.split_at_mut(zeros.len());
        head.copy_from_slice(&zeros);
        tail.copy_from_slice(&ones);
        zeros.clear();
        ones.clear();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_sort_u64() {
        let mut values = [170, 45, 75, 90, 802, 24, 2, 66];
        radix_sort_u64(&mut values).unwrap();
        assert_eq!(values, [2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_radix_sort_u64_duplicates() {
        let mut values = [5, 1, 5, 0, 1, 5];
        radix_sort_u64(&mut values).unwrap();
        assert_eq!(values, [0, 1, 1, 5, 5, 5]);
    }

    #[test]
    fn test_radix_sort_u64_trivial() {
        let mut empty: [u64; 0] = [];
        radix_sort_u64(&mut empty).unwrap();
        let mut zeros = [0, 0, 0];
        radix_sort_u64(&mut zeros).unwrap();
        assert_eq!(zeros, [0, 0, 0]);
    }

    #[test]
    fn test_radix_sort_u64_high_bit() {
        let mut values = [u64::MAX, 1, 1 << 63, 0, u64::MAX - 1];
        radix_sort_u64(&mut values).unwrap();
        assert_eq!(values, [0, 1, 1 << 63, u64::MAX - 1, u64::MAX]);
    }
}
