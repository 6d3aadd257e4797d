/// Sum of the base-10 digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Folds `n` by digit sums until it is at most 9. Only 0 reduces to 0.
pub fn reduce_to_single(n: u64) -> u8 {
    let mut n = n;
    while n > 9 {
        n = digit_sum(n);
    }
    n as u8
}

/// Reduces a decimal string; anything that is not a plain non-negative integer counts as 0.
pub fn reduce_coerced(input: &str) -> u8 {
    let value = input.trim().parse::<u64>().unwrap_or(0);
    reduce_to_single(value)
}

/// Sums the decimal digits found in `digits`, skipping any other character.
pub fn sum_digit_chars(digits: &str) -> u64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum()
}
