//! Fluent builder for constructing a [`Simulation`].

use ped_agent::AgentArena;
use ped_core::SimConfig;
use ped_geometry::{AreaMap, Geometry};
use ped_model::{OperationalModel, ProfileRegistry};
use ped_spatial::{NeighborhoodSearch, RoutingEngine};

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<M, R>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step width, total steps, seed, grid cell size, …
/// - `M: OperationalModel` — the force model (e.g. [`ped_model::GcfmModel`])
/// - `R: RoutingEngine` — the path planner (e.g.
///   [`ped_spatial::DirectRoutingEngine`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                |
/// |-----------------|----------------------------------------|
/// | `.areas(a)`     | No areas (agents never exit)           |
/// | `.geometry(g)`  | `Geometry::empty()` (no walls)         |
/// | `.profiles(p)`  | One default [`ParameterProfile`]       |
///
/// [`ParameterProfile`]: ped_model::ParameterProfile
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(config, GcfmModel::new(), DirectRoutingEngine)
///     .areas(areas)
///     .geometry(geometry)
///     .build()?;
/// let id = sim.add_agent(spec)?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimulationBuilder<M: OperationalModel, R: RoutingEngine> {
    config: SimConfig,
    model: M,
    routing: R,
    areas: Option<AreaMap>,
    geometry: Option<Geometry>,
    profiles: Option<ProfileRegistry>,
}

impl<M: OperationalModel, R: RoutingEngine> SimulationBuilder<M, R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, model: M, routing: R) -> Self {
        Self {
            config,
            model,
            routing,
            areas: None,
            geometry: None,
            profiles: None,
        }
    }

    /// Supply the goal and exit areas journeys refer to.
    pub fn areas(mut self, areas: AreaMap) -> Self {
        self.areas = Some(areas);
        self
    }

    /// Supply the static wall geometry.
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Supply the parameter-profile registry.
    ///
    /// If not called, a registry holding a single default profile (id 0) is
    /// used.
    pub fn profiles(mut self, profiles: ProfileRegistry) -> Self {
        self.profiles = Some(profiles);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Simulation`].
    ///
    /// # Errors
    ///
    /// `SimError::Config` when `dt_secs` is not positive, a profile fails
    /// validation, or the grid cell size is smaller than the largest profile
    /// interaction radius (radius queries could then miss agents two cells
    /// away).
    pub fn build(self) -> SimResult<Simulation<M, R>> {
        if !(self.config.dt_secs > 0.0) {
            return Err(SimError::Config(format!(
                "dt_secs must be positive, got {}",
                self.config.dt_secs
            )));
        }

        if !(self.config.cell_size > 0.0) {
            return Err(SimError::Config(format!(
                "cell_size must be positive, got {}",
                self.config.cell_size
            )));
        }

        let profiles = self.profiles.unwrap_or_else(|| {
            let mut registry = ProfileRegistry::new();
            registry.add(ped_model::ParameterProfile::default());
            registry
        });
        profiles.validate_all()?;

        let max_radius = profiles.max_interaction_radius();
        if self.config.cell_size < max_radius {
            return Err(SimError::Config(format!(
                "grid cell size {} is smaller than the largest interaction radius {max_radius}",
                self.config.cell_size
            )));
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            None => None,
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("thread pool: {e}")))?,
            ),
        };

        Ok(Simulation {
            clock: self.config.make_clock(),
            grid: NeighborhoodSearch::new(self.config.cell_size),
            agents: AgentArena::new(self.config.seed),
            areas: self.areas.unwrap_or_default(),
            geometry: self.geometry.unwrap_or_else(Geometry::empty),
            profiles,
            routing: self.routing,
            model: self.model,
            config: self.config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
