use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Edit<U> {
        match self {
            Edit::Delete { value } => Edit::Delete { value: f(value) },
            Edit::Insert { value } => Edit::Insert { value: f(value) },
            Edit::Equal { value } => Edit::Equal { value: f(value) },
        }
    }
}

impl<T> Edit<T>
where
    T: AsRef<str>,
{
    /// Whether the line carries its `\n` terminator
    pub fn is_terminated(&self) -> bool {
        self.value().as_ref().ends_with('\n')
    }

    /// The line with its change marker and without its terminator
    pub fn as_string(&self) -> String {
        let sign = match self {
            Edit::Delete { .. } => '-',
            Edit::Insert { .. } => '+',
            Edit::Equal { .. } => ' ',
        };
        let line = self.value().as_ref();

        format!("{}{}", sign, line.strip_suffix('\n').unwrap_or(line))
    }
}

impl<T> Display for Edit<T>
where
    T: AsRef<str>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm<T> {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Vec<Edit<T>>;
}

/// Furthest reaching `x` on every diagonal `k = x - y` after some number of edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    offset: isize,
    xs: Vec<isize>,
}

impl Frontier {
    // one spare slot so that d = 0 can read k + 1 even when both inputs are empty
    fn new(n: isize, m: isize) -> Self {
        Frontier {
            offset: n + m,
            xs: vec![0; (2 * (n + m) + 2) as usize],
        }
    }

    fn get(&self, k: isize) -> isize {
        self.xs[(self.offset + k) as usize]
    }

    fn set(&mut self, k: isize, x: isize) {
        self.xs[(self.offset + k) as usize] = x;
    }

    /// Diagonal the best path to `k` comes from at edit distance `d`
    ///
    /// `k + 1` means the last edit was an insertion, `k - 1` a deletion. Ties
    /// go to the insertion.
    fn predecessor(&self, k: isize, d: isize) -> isize {
        if k == -d || (k != d && self.get(k - 1) + 1 <= self.get(k + 1)) {
            k + 1
        } else {
            k - 1
        }
    }
}

/// Myers' greedy shortest-edit-script algorithm over two sequences
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> MyersDiff<'d, T> {
    fn sizes(&self) -> (isize, isize) {
        (self.a.len() as isize, self.b.len() as isize)
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'d, T> {
    type Trace = Vec<Frontier>;
    type EditPath = Vec<(isize, isize, isize, isize)>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = self.sizes();
        let mut frontier = Frontier::new(n, m);
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(frontier.clone());

            for k in (-d..=d).step_by(2) {
                let prev_k = frontier.predecessor(k, d);
                let mut x = if prev_k == k + 1 {
                    frontier.get(prev_k)
                } else {
                    frontier.get(prev_k) + 1
                };
                let mut y = x - k;

                // follow the diagonal while lines match
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    x += 1;
                    y += 1;
                }
                frontier.set(k, x);

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = self.sizes();
        let mut edit_path = Vec::new();

        for (d, frontier) in self.compute_shortest_edit().iter().enumerate().rev() {
            let d = d as isize;
            let prev_k = frontier.predecessor(x - y, d);
            let prev_x = frontier.get(prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn diff(&self) -> Vec<Edit<T>> {
        let (n, m) = self.sizes();
        let mut diff = Vec::new();

        for (prev_x, prev_y, x, y) in self.backtrack() {
            let edit = if x == prev_x {
                (0..m).contains(&prev_y).then(|| Edit::Insert {
                    value: self.b[prev_y as usize].clone(),
                })
            } else if y == prev_y {
                (0..n).contains(&prev_x).then(|| Edit::Delete {
                    value: self.a[prev_x as usize].clone(),
                })
            } else {
                (0..n).contains(&prev_x).then(|| Edit::Equal {
                    value: self.a[prev_x as usize].clone(),
                })
            };
            diff.extend(edit);
        }

        diff.reverse();
        diff
    }
}
