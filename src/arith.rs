use std::fmt;

pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Sums `1..=a` recursively.
///
/// # Panics
///
/// Panics if `a < 1`; the recursion only terminates at `a == 1`.
pub fn sum_to(a: i64) -> i64 {
    assert!(a >= 1, "sum_to called with {}, expected a >= 1", a);
    if a == 1 {
        return 1;
    }
    a + sum_to(a - 1)
}

/// Both results of [`self_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestReport {
    /// `sum` folded over `1..count`.
    pub ret_1: i64,
    /// `sum_to(count - 1)`.
    pub ret_2: i64,
}

impl SelfTestReport {
    pub fn agrees(&self) -> bool {
        self.ret_1 == self.ret_2
    }

    /// The two diagnostic lines, in print order.
    pub fn lines(&self) -> [String; 2] {
        [
            format!("ret_1: {}", self.ret_1),
            format!("ret_2: {}", self.ret_2),
        ]
    }
}

impl fmt::Display for SelfTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.lines();
        write!(f, "{}\n{}", first, second)
    }
}

/// Computes the sum of `1..count` twice, iteratively and recursively.
pub fn self_test(count: i64) -> SelfTestReport {
    let mut ret = 0;
    for i in 1..count {
        ret = sum(ret, i);
    }
    SelfTestReport {
        ret_1: ret,
        ret_2: sum_to(count - 1),
    }
}
