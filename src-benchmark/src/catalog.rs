//! The closed set of benchmark functions and their batch evaluation
//!
//! [`BenchmarkFunction`] is the dispatch tag: each variant maps to one entry
//! of a static table holding its per-row kernel, search area, optimum and
//! description.

use std::fmt;
use std::str::FromStr;

use ndarray::{aview1, Array1, ArrayBase, ArrayView1, Data, Dimension, Zip};
use serde::{Deserialize, Serialize};

use crate::batch::validate;
use crate::error::{BenchmarkError, Result};
use crate::functions;

/// Kernel evaluating a single candidate vector
pub type RowFunction = fn(ArrayView1<f64>) -> f64;

/// One of the nine benchmark functions of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BenchmarkFunction {
    Sphere,
    Ellipsoid,
    #[serde(rename = "kTablet")]
    KTablet,
    RosenbrockStar,
    RosenbrockChain,
    Bohachevsky,
    Ackley,
    Schaffer,
    Rastrigin,
}

struct CatalogEntry {
    function: BenchmarkFunction,
    name: &'static str,
    kernel: RowFunction,
    search_area: [f64; 2],
    optimum: f64,
    min_dimension: usize,
    multimodal: bool,
    description: &'static str,
}

// Indexed by the enum discriminant
static CATALOG: [CatalogEntry; 9] = [
    CatalogEntry {
        function: BenchmarkFunction::Sphere,
        name: "Sphere",
        kernel: functions::sphere,
        search_area: [-5.12, 5.12],
        optimum: 0.0,
        min_dimension: 1,
        multimodal: false,
        description: "Basic convex bowl",
    },
    CatalogEntry {
        function: BenchmarkFunction::Ellipsoid,
        name: "Ellipsoid",
        kernel: functions::ellipsoid,
        search_area: [-5.12, 5.12],
        optimum: 0.0,
        min_dimension: 2,
        multimodal: false,
        description: "Weak ill-scale, axis weights grow up to 1000",
    },
    CatalogEntry {
        function: BenchmarkFunction::KTablet,
        name: "kTablet",
        kernel: functions::k_tablet,
        search_area: [-5.12, 5.12],
        optimum: 0.0,
        min_dimension: 1,
        multimodal: false,
        description: "Strong ill-scale, last 3/4 of the axes scaled by 100",
    },
    CatalogEntry {
        function: BenchmarkFunction::RosenbrockStar,
        name: "RosenbrockStar",
        kernel: functions::rosenbrock_star,
        search_area: [-2.048, 2.048],
        optimum: 1.0,
        min_dimension: 2,
        multimodal: false,
        description: "Strong parameter dependency between x1 and the others",
    },
    CatalogEntry {
        function: BenchmarkFunction::RosenbrockChain,
        name: "RosenbrockChain",
        kernel: functions::rosenbrock_chain,
        search_area: [-2.048, 2.048],
        optimum: 1.0,
        min_dimension: 2,
        multimodal: false,
        description: "Strong parameter dependency between neighbouring parameters",
    },
    CatalogEntry {
        function: BenchmarkFunction::Bohachevsky,
        name: "Bohachevsky",
        kernel: functions::bohachevsky,
        search_area: [-5.12, 5.12],
        optimum: 0.0,
        min_dimension: 2,
        multimodal: true,
        description: "Weak multimodality",
    },
    CatalogEntry {
        function: BenchmarkFunction::Ackley,
        name: "Ackley",
        kernel: functions::ackley,
        search_area: [-32.768, 32.768],
        optimum: 0.0,
        min_dimension: 1,
        multimodal: true,
        description: "Weak multimodality under an exponential envelope",
    },
    CatalogEntry {
        function: BenchmarkFunction::Schaffer,
        name: "Schaffer",
        kernel: functions::schaffer,
        search_area: [-100.0, 100.0],
        optimum: 0.0,
        min_dimension: 2,
        multimodal: true,
        description: "Strong multimodality",
    },
    CatalogEntry {
        function: BenchmarkFunction::Rastrigin,
        name: "Rastrigin",
        kernel: functions::rastrigin,
        search_area: [-5.12, 5.12],
        optimum: 1.0,
        min_dimension: 1,
        multimodal: true,
        description: "Strong multimodality, optimum shifted to (1, ..., 1)",
    },
];

impl BenchmarkFunction {
    /// Every function of the catalog, in catalog order
    pub const ALL: [BenchmarkFunction; 9] = [
        BenchmarkFunction::Sphere,
        BenchmarkFunction::Ellipsoid,
        BenchmarkFunction::KTablet,
        BenchmarkFunction::RosenbrockStar,
        BenchmarkFunction::RosenbrockChain,
        BenchmarkFunction::Bohachevsky,
        BenchmarkFunction::Ackley,
        BenchmarkFunction::Schaffer,
        BenchmarkFunction::Rastrigin,
    ];

    fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    /// Canonical name, used as key of the metadata tables
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Kernel evaluating one candidate vector
    pub fn row_function(self) -> RowFunction {
        self.entry().kernel
    }

    /// Recommended search interval `[low, high]`, identical on every axis
    pub fn search_area(self) -> [f64; 2] {
        self.entry().search_area
    }

    /// Value repeated on every coordinate of the global minimizer (0 or 1)
    pub fn optimum_coordinate(self) -> f64 {
        self.entry().optimum
    }

    /// Global minimizer in `dimension` dimensions
    pub fn optimal_solution(self, dimension: usize) -> Vec<f64> {
        vec![self.optimum_coordinate(); dimension]
    }

    /// Smallest dimension for which the formula is meaningful
    ///
    /// Not enforced by [`evaluate`](Self::evaluate): Ellipsoid yields NaN for
    /// m = 1, the pairwise functions yield an empty sum.
    pub fn min_dimension(self) -> usize {
        self.entry().min_dimension
    }

    pub fn multimodal(self) -> bool {
        self.entry().multimodal
    }

    pub fn description(self) -> &'static str {
        self.entry().description
    }

    /// Evaluate a batch of shape `(n, m)`, one fitness value per row
    ///
    /// # Errors
    ///
    /// [`BenchmarkError::InvalidShape`] if `input` is not two-dimensional.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ndarray::array;
    /// use benchmark_function::BenchmarkFunction;
    ///
    /// let f = BenchmarkFunction::Sphere.evaluate(&array![[1.0, 2.0], [0.0, 0.0]]).unwrap();
    /// assert_eq!(f.to_vec(), vec![5.0, 0.0]);
    /// ```
    pub fn evaluate<S, D>(self, input: &ArrayBase<S, D>) -> Result<Array1<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let batch = validate(input)?;
        log::debug!("evaluating {} on {} sample(s)", self, batch.nrows());
        let kernel = self.row_function();
        Ok(Zip::from(batch.rows()).map_collect(|row| kernel(row)))
    }

    /// Same as [`evaluate`](Self::evaluate) with rows spread over the rayon
    /// thread pool; the output keeps the row order of the input.
    pub fn par_evaluate<S, D>(self, input: &ArrayBase<S, D>) -> Result<Array1<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let batch = validate(input)?;
        log::debug!("evaluating {} on {} sample(s) in parallel", self, batch.nrows());
        let kernel = self.row_function();
        Ok(Zip::from(batch.rows()).par_map_collect(|row| kernel(row)))
    }

    /// Evaluate a single candidate vector
    pub fn evaluate_point(self, x: &[f64]) -> f64 {
        (self.row_function())(aview1(x))
    }
}

impl fmt::Display for BenchmarkFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchmarkFunction {
    type Err = BenchmarkError;

    /// Accepts the canonical name (`kTablet`) or any casing with `_`, `-` or
    /// spaces (`k_tablet`, `rosenbrock-chain`).
    fn from_str(s: &str) -> Result<Self> {
        let normalize = |name: &str| -> String {
            name.chars()
                .filter(|c| !matches!(c, '_' | '-' | ' '))
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = normalize(s);
        BenchmarkFunction::ALL
            .into_iter()
            .find(|function| normalize(function.name()) == wanted)
            .ok_or_else(|| BenchmarkError::UnknownFunction(s.to_string()))
    }
}
