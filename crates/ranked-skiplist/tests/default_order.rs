#![allow(unused_crate_dependencies, reason = "These are tests, not the main crate.")]

mod all;


use oorandom::Rand32;

use ranked_skiplist::{Comparator, DefaultComparator, Iter, RankedSkiplist, SkiplistError};


all::tests_for_all_comparators!(DefaultComparator);
