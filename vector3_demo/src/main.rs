//! Vector3 demo application
//!
//! Parses two vectors and an optional interpolation factor from the command
//! line and logs the result of every vector operation.
//!
//! ```text
//! vector3_demo "(1, 2, 3)" "[0, 1, 0]" 0.25
//! ```

use std::num::ParseFloatError;

use thiserror::Error;
use vector3::{logging, ParseVector3Error, Vector3};

const DEFAULT_T: f32 = 0.5;

/// Demo errors
#[derive(Error, Debug)]
enum DemoError {
    /// Too many arguments
    #[error("usage: vector3_demo [VECTOR_A] [VECTOR_B] [T]")]
    Usage,

    /// A vector argument failed to parse
    #[error("invalid vector argument {position}: {source}")]
    Vector {
        position: usize,
        #[source]
        source: ParseVector3Error,
    },

    /// The interpolation factor failed to parse
    #[error("invalid interpolation factor: {0}")]
    Factor(#[from] ParseFloatError),
}

/// Parsed command line
struct DemoArgs {
    a: Vector3,
    b: Vector3,
    t: f32,
}

impl DemoArgs {
    fn parse<I>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() > 3 {
            return Err(DemoError::Usage);
        }

        let vector_at = |position: usize, default: Vector3| -> Result<Vector3, DemoError> {
            args.get(position).map_or(Ok(default), |arg| {
                arg.parse()
                    .map_err(|source| DemoError::Vector { position: position + 1, source })
            })
        };

        let a = vector_at(0, Vector3::unit_x())?;
        let b = vector_at(1, Vector3::unit_y())?;
        let t = match args.get(2) {
            Some(arg) => arg.trim().parse()?,
            None => DEFAULT_T,
        };

        Ok(Self { a, b, t })
    }
}

fn run(args: &DemoArgs) {
    let DemoArgs { a, b, t } = *args;

    log::info!("a = {a}, b = {b}, t = {t}");
    log::info!("a + b = {}", a + b);
    log::info!("a - b = {}", a - b);
    log::info!("a * b = {}", a * b);
    log::info!("a / b = {}", a / b);
    log::info!("a x b = {}", a.cross(b));
    log::info!("a . b = {}", a.dot(b));
    log::info!("|a| = {}, |b| = {}", a.length(), b.magnitude());
    log::info!("distance(a, b) = {}", a.distance(b));

    let a_unit = a.normalized();
    let b_unit = b.normalized();
    log::info!("normalized a = {a_unit:.4}, normalized b = {b_unit:.4}");

    log::info!("lerp(a, b, {t}) = {:.4}", a.lerp(b, t));
    log::info!("slerp(a^, b^, {t}) = {:.4}", a_unit.slerp(b_unit, t));
    log::info!("reflect(a, b^) = {:.4}", a.reflect(b_unit));

    let mut accumulated = a;
    accumulated += b;
    accumulated *= t;
    accumulated.normalize();
    log::info!("normalize((a + b) * t) = {accumulated:.4}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args = DemoArgs::parse(std::env::args().skip(1))?;
    run(&args);

    Ok(())
}
