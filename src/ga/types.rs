//! Chromosome encoding and fitness evaluation.
//!
//! A board is encoded column by column: `genes[c]` is the row of the queen
//! standing in column `c`. One queen per column holds by construction, so
//! only row and diagonal collisions are left for the fitness to penalize.

use crate::error::GenomeError;

/// Fitness of a perfect placement on an `n`×`n` board: every one of the
/// `n(n-1)/2` queen pairs is non-attacking.
///
/// # Examples
///
/// ```
/// use nqueens_ga::ga::max_fitness;
///
/// assert_eq!(max_fitness(8), 28);
/// assert_eq!(max_fitness(4), 6);
/// ```
pub fn max_fitness(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Counts the non-attacking queen pairs of a placement.
///
/// A pair `(i, j)`, `i < j`, is non-attacking when the queens sit on
/// different rows and off each other's diagonals.
///
/// # Complexity
/// O(n²)
pub fn evaluate(genes: &[usize]) -> usize {
    let n = genes.len();
    let mut fitness = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (genes[i], genes[j]);
            if a != b && j - i != a.abs_diff(b) {
                fitness += 1;
            }
        }
    }
    fitness
}

/// A candidate queen placement together with its fitness.
///
/// Chromosomes are values: operators never edit one in place, they build
/// a new one. The fitness is computed once, on construction, so it can
/// never go stale.
///
/// # Invariant
/// `genes` is non-empty and every gene lies in `[0, genes.len())`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Chromosome {
    genes: Vec<usize>,
    fitness: usize,
}

impl Chromosome {
    /// Builds a chromosome, checking that every gene names a row of the board.
    ///
    /// The board size is the number of genes.
    ///
    /// ```
    /// use nqueens_ga::ga::Chromosome;
    ///
    /// let c = Chromosome::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
    /// assert_eq!(c.fitness(), 28);
    /// assert!(c.is_solution());
    ///
    /// assert!(Chromosome::new(vec![0, 4]).is_err());
    /// ```
    pub fn new(genes: Vec<usize>) -> Result<Self, GenomeError> {
        let board_size = genes.len();
        if board_size == 0 {
            return Err(GenomeError::Empty);
        }
        if let Some((index, &gene)) = genes.iter().enumerate().find(|&(_, &g)| g >= board_size) {
            return Err(GenomeError::GeneOutOfRange {
                index,
                gene,
                board_size,
            });
        }
        Ok(Self::from_genes(genes))
    }

    /// Builds a chromosome from genes already known to satisfy the invariant.
    pub(crate) fn from_genes(genes: Vec<usize>) -> Self {
        debug_assert!(genes.iter().all(|&g| g < genes.len()));
        let fitness = evaluate(&genes);
        Self { genes, fitness }
    }

    /// Row of the queen in each column.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Number of non-attacking queen pairs.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// Board size N (number of columns).
    pub fn board_size(&self) -> usize {
        self.genes.len()
    }

    /// Number of attacking queen pairs.
    pub fn attacking_pairs(&self) -> usize {
        max_fitness(self.board_size()) - self.fitness
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.fitness == max_fitness(self.board_size())
    }

    /// Consumes the chromosome, returning its genes.
    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }
}

impl TryFrom<Vec<usize>> for Chromosome {
    type Error = GenomeError;

    fn try_from(genes: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(genes)
    }
}

impl From<Chromosome> for Vec<usize> {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.genes
    }
}
