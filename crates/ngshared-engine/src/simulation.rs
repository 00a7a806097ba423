//! A netlist paired with the analysis to run on it.

use indexmap::IndexMap;
use ngshared_core::analysis::Analysis;
use ngshared_netlist::Netlist;

use crate::error::{Error, Result};
use crate::session::Session;
use crate::vector::VectorData;

/// A validated netlist plus an analysis, run against a [`Session`].
///
/// ```no_run
/// use ngshared_core::analysis::Analysis;
/// use ngshared_engine::{Session, SessionConfig, Simulation};
/// use ngshared_netlist::Netlist;
///
/// let session = Session::open(&SessionConfig::from_env())?;
/// let netlist = Netlist::from_input("CS-Amp.cir")?;
///
/// let mut amp = Simulation::new(netlist);
/// let tran: Analysis = "tran 1u 10m".parse()?;
/// amp.setup(tran);
/// amp.run(&session)?;
///
/// let v_out = amp.vector(&session, "nout", None)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    netlist: Netlist,
    analysis: Option<Analysis>,
}

impl Simulation {
    pub fn new(netlist: Netlist) -> Self {
        Self {
            netlist,
            analysis: None,
        }
    }

    /// Choose the analysis for the next [`run`](Self::run).
    pub fn setup(&mut self, analysis: Analysis) -> &mut Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn netlist(&self) -> &Netlist {
        &self.netlist
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Load the netlist and run the analysis. Returns the analysis output.
    pub fn run(&self, session: &Session) -> Result<Vec<String>> {
        let analysis = self.analysis.as_ref().ok_or(Error::NoAnalysis)?;
        session.load(&self.netlist)?;
        session.run(analysis)
    }

    pub fn current_plot(&self, session: &Session) -> Result<String> {
        session.current_plot()
    }

    pub fn plots(&self, session: &Session) -> Vec<String> {
        session.get_plot_names()
    }

    pub fn vector_names(&self, session: &Session, plot: Option<&str>) -> Result<Vec<String>> {
        session.get_vector_names(plot)
    }

    pub fn vector(&self, session: &Session, name: &str, plot: Option<&str>) -> Result<VectorData> {
        session.get_data(name, plot)
    }

    pub fn vectors(&self, session: &Session, plot: Option<&str>) -> Result<IndexMap<String, VectorData>> {
        session.get_all_data(plot)
    }
}
