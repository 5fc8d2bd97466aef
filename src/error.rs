#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    LengthMismatch { population: usize, weights: usize },
    OverDraw { draws: usize, population: usize },
    Empty { draws: usize },
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::LengthMismatch { population, weights } => {
                write!(
                    f,
                    "length of population ({population}) unequal to length of weights ({weights})"
                )
            }
            SampleError::OverDraw { draws, population } => {
                write!(
                    f,
                    "cannot sample {draws} without replacement from a population of {population}"
                )
            }
            SampleError::Empty { draws } => {
                write!(f, "cannot draw {draws} from an empty population")
            }
        }
    }
}

impl std::error::Error for SampleError {}
