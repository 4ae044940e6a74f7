//! The globe tree: a bounded-depth quad-tree over the sky.
//!
//! Every tree node covers one [`Section`] and splits it into four
//! quadrants. An object descends into the first quadrant that fully
//! contains its section and stays at the current node when none does or
//! the depth limit is reached. Children are created on first use and
//! allocated from the same [`Arena`] as the root's entries.

use std::fmt;
use std::ptr;

use starfield_arena::Arena;
use starfield_core::{arcseconds_to_degrees, Area, Catalog, CelestialObject, Position, Section};

use crate::config::{GlobeConfig, OverlapMode};
use crate::error::GlobeError;
use crate::node::{Node, NodeList};
use crate::stats::TreeStats;

/// Quad-tree index of celestial objects.
///
/// The tree borrows its objects from a catalog and its storage from an
/// arena; both must outlive it. Searches write their results into a
/// separate scratch arena, so result lists can be dropped, and the scratch
/// arena cleared, independently of the tree.
///
/// # Example
///
/// ```
/// use starfield_arena::{Alignment, Arena};
/// use starfield_core::{Area, CelestialObject, Position, Section};
/// use starfield_globe::GlobeTree;
///
/// struct Star { ra: f64, decl: f64 }
///
/// impl CelestialObject for Star {
///     fn position(&self) -> Position { Position::new(self.ra, self.decl) }
///     fn dimension(&self) -> f64 { 0.0 }
/// }
///
/// let catalog = vec![Star { ra: 10.0, decl: 5.0 }, Star { ra: 200.0, decl: -40.0 }];
/// let arena = Arena::identity(Alignment::Eight);
/// let tree = GlobeTree::new_root(&arena, &catalog);
/// assert_eq!(tree.size(), 2);
///
/// let scratch = Arena::identity(Alignment::Eight);
/// let query = Section::new(Position::raw(0.0, 0.0), Area::new(20.0, 20.0));
/// let hits = tree.search(&scratch, &query);
/// assert_eq!(hits.len(), 1);
/// ```
pub struct GlobeTree<'a, O> {
    section: Section,
    quadrants: [Section; 4],
    children: [Option<&'a mut GlobeTree<'a, O>>; 4],
    nodes: NodeList<'a, O>,
    depth: usize,
    arena: &'a Arena,
    config: GlobeConfig,
}

impl<'a, O: CelestialObject> GlobeTree<'a, O> {
    /// Create an empty tree covering `section`, with default configuration.
    pub fn new(arena: &'a Arena, section: Section) -> Self {
        Self::at_depth(arena, section, 0, GlobeConfig::default())
    }

    /// Create an empty tree covering `section`.
    ///
    /// # Errors
    ///
    /// Returns a [`GlobeError`] if the configuration is invalid.
    pub fn with_config(
        arena: &'a Arena,
        section: Section,
        config: GlobeConfig,
    ) -> Result<Self, GlobeError> {
        config.validate()?;
        Ok(Self::at_depth(arena, section, 0, config))
    }

    /// Build a tree over the whole sky holding every object of `catalog`,
    /// with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if an object is larger than the sky.
    pub fn new_root<C>(arena: &'a Arena, catalog: &'a C) -> Self
    where
        C: Catalog<Object = O> + ?Sized,
    {
        let mut root = Self::new(arena, Section::FULL_SKY);
        root.emplace_catalog(catalog);
        root
    }

    /// Build a tree over the whole sky holding every object of `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a [`GlobeError`] if the configuration is invalid.
    ///
    /// # Panics
    ///
    /// Panics if an object is larger than the sky.
    pub fn new_root_with_config<C>(
        arena: &'a Arena,
        catalog: &'a C,
        config: GlobeConfig,
    ) -> Result<Self, GlobeError>
    where
        C: Catalog<Object = O> + ?Sized,
    {
        let mut root = Self::with_config(arena, Section::FULL_SKY, config)?;
        root.emplace_catalog(catalog);
        Ok(root)
    }

    fn at_depth(arena: &'a Arena, section: Section, depth: usize, config: GlobeConfig) -> Self {
        Self {
            section,
            quadrants: section.quadrants(),
            children: [None, None, None, None],
            nodes: NodeList::new(arena),
            depth,
            arena,
            config,
        }
    }

    fn emplace_catalog<C>(&mut self, catalog: &'a C)
    where
        C: Catalog<Object = O> + ?Sized,
    {
        let count = catalog.object_count();
        for index in 0..count {
            self.emplace(catalog.object(index));
        }
        tracing::debug!(
            objects = count,
            max_depth = self.config.max_depth,
            blocks = self.arena.block_count(),
            reserved = self.arena.total_reserved(),
            "built globe tree"
        );
    }

    /// The section an object occupies.
    ///
    /// A square centred on the object's position whose side is its
    /// dimension in degrees; a dimension of zero counts as one arcsecond.
    /// A square reaching past an edge of the sky is shifted back inside,
    /// so it is no longer centred on the position. Right-ascension does not
    /// wrap: an extended object near ra 0 covers the low edge of the sky
    /// but not the strip just below ra 360, and the same holds the other
    /// way round.
    pub fn object_section(object: &O) -> Section {
        let dimension = match object.dimension() {
            d if d == 0.0 => 1.0,
            d => d,
        };
        let side = arcseconds_to_degrees(dimension);
        let section = Section::centered(object.position(), Area::square(side));
        Self::shift_into_sky(section)
    }

    fn shift_into_sky(section: Section) -> Section {
        let sky = Section::FULL_SKY;
        let sky_end = sky.end();
        let clamp = |start: f64, extent: f64, lo: f64, hi: f64| {
            if extent.is_nan() || extent > hi - lo {
                start
            } else {
                start.clamp(lo, hi - extent)
            }
        };
        Section::new(
            Position::raw(
                clamp(
                    section.position.right_ascension,
                    section.area.width,
                    sky.position.right_ascension,
                    sky_end.right_ascension,
                ),
                clamp(
                    section.position.declination,
                    section.area.height,
                    sky.position.declination,
                    sky_end.declination,
                ),
            ),
            section.area,
        )
    }

    /// Insert `object`.
    ///
    /// # Panics
    ///
    /// Panics if the object's section does not fit inside this tree's
    /// section. That means the object lies outside the indexed domain or
    /// is larger than it.
    pub fn emplace(&mut self, object: &'a O) {
        let section = Self::object_section(object);
        self.insert(section, object);
    }

    fn insert(&mut self, section: Section, object: &'a O) {
        if self.depth < self.config.max_depth {
            if let Some(index) = self.quadrants.iter().position(|q| q.contains(&section)) {
                self.child_or_create(index).insert(section, object);
                return;
            }
        }
        assert!(
            self.section.contains(&section),
            "object section {section} does not fit tree section {} at depth {}",
            self.section,
            self.depth
        );
        self.nodes.emplace(section, object);
    }

    fn child_or_create(&mut self, index: usize) -> &mut GlobeTree<'a, O> {
        let arena = self.arena;
        let quadrant = self.quadrants[index];
        let depth = self.depth + 1;
        let config = self.config;
        self.children[index]
            .get_or_insert_with(|| arena.alloc_value(Self::at_depth(arena, quadrant, depth, config)))
    }

    /// Number of objects stored in this tree and all of its descendants.
    pub fn size(&self) -> usize {
        self.nodes.len() + self.child_trees().map(GlobeTree::size).sum::<usize>()
    }

    /// Collect every object whose section overlaps `query`.
    ///
    /// Children entirely inside the query are copied without testing
    /// their objects; children outside it are skipped. The result lives in
    /// `scratch`, not in the tree's arena.
    pub fn search<'s>(&self, scratch: &'s Arena, query: &Section) -> NodeList<'s, O>
    where
        'a: 's,
    {
        let mut result = NodeList::new(scratch);
        self.search_into(query, self.config.overlap, &mut result);
        tracing::trace!(query = %query, hits = result.len(), "globe tree search");
        result
    }

    /// Collect every object whose section contains `point`, edges
    /// inclusive.
    pub fn search_point<'s>(&self, scratch: &'s Arena, point: Position) -> NodeList<'s, O>
    where
        'a: 's,
    {
        let query = Section::new(point, Area::default());
        let mut result = NodeList::new(scratch);
        self.search_into(&query, OverlapMode::Exact, &mut result);
        result
    }

    fn search_into<'s>(&self, query: &Section, overlap: OverlapMode, out: &mut NodeList<'s, O>)
    where
        'a: 's,
    {
        for node in &self.nodes {
            if overlap.test(query, node.section()) {
                out.emplace(*node.section(), node.object());
            }
        }
        for child in self.child_trees() {
            if query.contains(&child.section) {
                child.copy_into(out);
            } else if overlap.test(query, &child.section) {
                child.search_into(query, overlap, out);
            }
        }
    }

    fn copy_into<'s>(&self, out: &mut NodeList<'s, O>)
    where
        'a: 's,
    {
        out.extend_from(&self.nodes);
        for child in self.child_trees() {
            child.copy_into(out);
        }
    }

    /// Find the entry holding `object`, compared by address.
    ///
    /// Follows the path `emplace` would take, so the lookup visits at most
    /// one tree node per level.
    pub fn locate(&self, object: &O) -> Option<&'a Node<'a, O>> {
        let section = Self::object_section(object);
        let mut tree = self;
        while tree.depth < tree.config.max_depth {
            let Some(index) = tree.quadrants.iter().position(|q| q.contains(&section)) else {
                break;
            };
            tree = tree.children[index].as_deref()?;
        }
        tree.nodes.iter().find(|node| ptr::eq(node.object(), object))
    }

    /// Summary of the tree's shape.
    ///
    /// Depths in the result are relative to this tree node.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.collect_stats(self.depth, &mut stats);
        stats
    }

    fn collect_stats(&self, base: usize, stats: &mut TreeStats) {
        stats.record(self.depth - base, self.nodes.len());
        for child in self.child_trees() {
            child.collect_stats(base, stats);
        }
    }
}

impl<'a, O> GlobeTree<'a, O> {
    /// The section this tree covers.
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// The quadrant at `index`, in the fixed order of
    /// [`Section::quadrants`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    pub fn quadrant(&self, index: usize) -> &Section {
        &self.quadrants[index]
    }

    /// The child covering quadrant `index`, if one has been created.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    pub fn child(&self, index: usize) -> Option<&GlobeTree<'a, O>> {
        self.children[index].as_deref()
    }

    /// Objects stored directly at this tree node.
    pub fn nodes(&self) -> &NodeList<'a, O> {
        &self.nodes
    }

    /// Depth below the root; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The configuration shared by every node of this tree.
    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    /// The arena children and entries are allocated from.
    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    fn child_trees(&self) -> impl Iterator<Item = &GlobeTree<'a, O>> {
        self.children.iter().filter_map(|child| child.as_deref())
    }
}

impl<O> fmt::Debug for GlobeTree<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobeTree")
            .field("section", &self.section)
            .field("depth", &self.depth)
            .field("objects", &self.nodes.len())
            .field(
                "children",
                &self.children.iter().map(Option::is_some).collect::<Vec<_>>(),
            )
            .finish()
    }
}
