//! Shared strategies and helpers for the geometry property tests.

#![allow(dead_code)]

use launch_axioms::geometry::{Axis, FlagSet};
use proptest::prelude::*;

/// How a test configures the local size of one axis.
#[derive(Debug, Clone, Copy)]
pub enum LocalSel {
    Absent,
    Fixed(u64),
    Free,
}

/// How a test configures the group count of one axis.
#[derive(Debug, Clone, Copy)]
pub enum GroupSel {
    Absent,
    Fixed(u64),
    Free,
    /// `_FREE` together with a global size.
    FreeWithGlobal(u64),
    /// `_FROM_GLOBAL_SIZE` together with a global size.
    FromGlobal(u64),
}

/// A well-formed launch description: one selector per dimensionality
/// and at most one specification per quantity and axis.
#[derive(Debug, Clone)]
pub struct Launch {
    pub work_group_dims: usize,
    pub grid_dims: usize,
    pub local: [LocalSel; 3],
    pub groups: [GroupSel; 3],
    pub offsets: [u64; 3],
}

pub fn local_sel() -> impl Strategy<Value = LocalSel> {
    prop_oneof![
        Just(LocalSel::Absent),
        (1u64..=64).prop_map(LocalSel::Fixed),
        Just(LocalSel::Free),
    ]
}

/// Global sizes are drawn both as multiples of small local sizes and as
/// arbitrary values so that divisibility both holds and fails.
pub fn global_size() -> impl Strategy<Value = u64> {
    prop_oneof![(1u64..=64, 1u64..=64).prop_map(|(l, k)| l * k), 1u64..=4096]
}

pub fn group_sel() -> impl Strategy<Value = GroupSel> {
    prop_oneof![
        Just(GroupSel::Absent),
        (1u64..=128).prop_map(GroupSel::Fixed),
        Just(GroupSel::Free),
        global_size().prop_map(GroupSel::FreeWithGlobal),
        global_size().prop_map(GroupSel::FromGlobal),
    ]
}

pub fn launch() -> impl Strategy<Value = Launch> {
    (
        1usize..=3,
        1usize..=3,
        [local_sel(), local_sel(), local_sel()],
        [group_sel(), group_sel(), group_sel()],
        [0u64..=4096, 0u64..=4096, 0u64..=4096],
    )
        .prop_map(|(work_group_dims, grid_dims, local, groups, offsets)| Launch {
            work_group_dims,
            grid_dims,
            local,
            groups,
            offsets,
        })
}

impl Launch {
    pub fn flags(&self) -> FlagSet {
        let mut set = FlagSet::new()
            .with(format!("__{}D_WORK_GROUP", self.work_group_dims), true)
            .with(format!("__{}D_GRID", self.grid_dims), true);

        for axis in Axis::ALL {
            let d = axis.index();
            match self.local[d] {
                LocalSel::Absent => {}
                LocalSel::Fixed(n) => set.set(format!("__LOCAL_SIZE_{d}"), n),
                LocalSel::Free => set.set(format!("__LOCAL_SIZE_{d}_FREE"), true),
            }
            match self.groups[d] {
                GroupSel::Absent => {}
                GroupSel::Fixed(n) => set.set(format!("__NUM_GROUPS_{d}"), n),
                GroupSel::Free => set.set(format!("__NUM_GROUPS_{d}_FREE"), true),
                GroupSel::FreeWithGlobal(g) => {
                    set.set(format!("__NUM_GROUPS_{d}_FREE"), true);
                    set.set(format!("__GLOBAL_SIZE_{d}"), g);
                }
                GroupSel::FromGlobal(g) => {
                    set.set(format!("__NUM_GROUPS_{d}_FROM_GLOBAL_SIZE"), true);
                    set.set(format!("__GLOBAL_SIZE_{d}"), g);
                }
            }
            if self.offsets[d] != 0 {
                set.set(format!("__GLOBAL_OFFSET_{d}"), self.offsets[d]);
            }
        }
        set
    }

    /// Whether some axis inside both dimensionalities pairs a fixed local
    /// size with a global size it does not divide.
    pub fn has_divisibility_conflict(&self) -> bool {
        (0..self.work_group_dims.min(self.grid_dims)).any(|d| {
            let global = match self.groups[d] {
                GroupSel::FreeWithGlobal(g) | GroupSel::FromGlobal(g) => g,
                _ => return false,
            };
            match self.local[d] {
                LocalSel::Fixed(l) => l > global || global % l != 0,
                _ => false,
            }
        })
    }
}
