use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use xmltree::Element;

use super::parsers::{BodyParser, EntityParser, LocatedParser, NameParser, WebsiteParser};
use super::{Capability, Entity};
use crate::error::{ConfigurationError, ParseError};

/// Immutable table associating each capability with its parser
///
/// Built once, then only read, so a registry can be shared freely between
/// threads.
pub struct CapabilityRegistry {
    parsers: BTreeMap<Capability, Box<dyn EntityParser>>,
}

impl CapabilityRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Process-wide registry holding the built-in parsers
    ///
    /// Initialized on first use and never modified afterwards.
    pub fn standard() -> &'static CapabilityRegistry {
        static STANDARD: OnceLock<CapabilityRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut parsers: BTreeMap<Capability, Box<dyn EntityParser>> = BTreeMap::new();
            parsers.insert(Capability::Named, Box::new(NameParser));
            parsers.insert(Capability::Located, Box::new(LocatedParser));
            parsers.insert(Capability::Website, Box::new(WebsiteParser));
            parsers.insert(Capability::Body, Box::new(BodyParser));
            tracing::debug!(parsers = parsers.len(), "standard capability registry initialized");
            CapabilityRegistry { parsers }
        })
    }

    pub fn parser(&self, capability: Capability) -> Option<&dyn EntityParser> {
        self.parsers.get(&capability).map(|parser| parser.as_ref())
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.parsers.contains_key(&capability)
    }

    /// Registered capabilities, in [`Capability`] order
    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.parsers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Check that every capability `E` declares has a parser
    pub fn ensure_supports<E: Entity>(&self) -> Result<(), ConfigurationError> {
        match E::CAPABILITIES
            .iter()
            .find(|capability| !self.supports(**capability))
        {
            Some(capability) => Err(ConfigurationError::MissingParser {
                entity: E::NAME,
                capability: *capability,
            }),
            None => Ok(()),
        }
    }

    /// Resolve the parsers for `E` once, failing if any is missing
    pub fn composite<E: Entity>(&self) -> Result<CompositeEntityParser<'_, E>, ConfigurationError> {
        CompositeEntityParser::new(self)
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("capabilities", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Collects parsers before freezing them into a [`CapabilityRegistry`]
#[derive(Default)]
pub struct RegistryBuilder {
    parsers: BTreeMap<Capability, Box<dyn EntityParser>>,
    duplicate: Option<Capability>,
}

impl RegistryBuilder {
    /// Register `parser` for the capability it reports
    ///
    /// Registering a second parser for the same capability makes
    /// [`build`](Self::build) fail.
    pub fn register(mut self, parser: impl EntityParser + 'static) -> Self {
        let capability = parser.capability();
        if self.parsers.contains_key(&capability) {
            self.duplicate.get_or_insert(capability);
        } else {
            self.parsers.insert(capability, Box::new(parser));
        }
        self
    }

    /// Register every built-in parser
    pub fn with_standard_parsers(self) -> Self {
        self.register(NameParser)
            .register(LocatedParser)
            .register(WebsiteParser)
            .register(BodyParser)
    }

    pub fn build(self) -> Result<CapabilityRegistry, ConfigurationError> {
        if let Some(capability) = self.duplicate {
            return Err(ConfigurationError::DuplicateParser(capability));
        }
        Ok(CapabilityRegistry {
            parsers: self.parsers,
        })
    }
}

/// Builds entities of type `E` by applying one parser per declared capability
///
/// Parsers are resolved when the composite is created, so a missing parser
/// surfaces as a [`ConfigurationError`] before any document is parsed.
pub struct CompositeEntityParser<'r, E> {
    parsers: Vec<&'r dyn EntityParser>,
    _entity: PhantomData<fn() -> E>,
}

impl<'r, E: Entity> CompositeEntityParser<'r, E> {
    pub fn new(registry: &'r CapabilityRegistry) -> Result<Self, ConfigurationError> {
        let parsers = E::CAPABILITIES
            .iter()
            .map(|capability| {
                registry
                    .parser(*capability)
                    .ok_or(ConfigurationError::MissingParser {
                        entity: E::NAME,
                        capability: *capability,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            parsers,
            _entity: PhantomData,
        })
    }

    /// Parse a fresh entity from `element`
    ///
    /// Stops at the first parser error; partially populated entities are
    /// never returned.
    pub fn parse(&self, element: &Element) -> Result<E, ParseError> {
        let mut entity = E::default();

        for parser in &self.parsers {
            let capability = parser.capability();
            let facet = entity
                .facet(capability)
                .ok_or(ParseError::FacetMismatch {
                    entity: E::NAME,
                    capability,
                })?;
            parser.parse(element, facet)?;
        }

        tracing::trace!(entity = E::NAME, element = %element.name, "composed entity");
        Ok(entity)
    }
}

impl<E: Entity> fmt::Debug for CompositeEntityParser<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeEntityParser")
            .field("entity", &E::NAME)
            .field("capabilities", &E::CAPABILITIES)
            .finish()
    }
}
