/// Tests which should pass for a list of `u32` entries under any total order.
///
/// `$cmp` must implement `Comparator<u32> + Default + Copy`. Expected results are computed by
/// sorting a `Vec` with the same comparator.
macro_rules! tests_for_all_comparators {
    ($cmp:ty $(,)?) => {
        fn sorted_with(entries: &[u32]) -> Vec<u32> {
            let cmp = <$cmp>::default();
            let mut sorted = entries.to_vec();
            sorted.sort_by(|lhs, rhs| Comparator::cmp(&cmp, lhs, rhs));
            sorted
        }

        fn build(entries: &[u32]) -> RankedSkiplist<u32, $cmp> {
            let mut list = RankedSkiplist::new(<$cmp>::default());
            for &entry in entries {
                list.insert(entry);
            }
            list
        }

        // ================================
        //  Empty List
        // ================================

        #[test]
        fn empty_list() {
            let list = RankedSkiplist::<u32, $cmp>::new(<$cmp>::default());

            assert!(list.is_empty());
            assert_eq!(list.len(), 0);
            assert!(!list.contains(&0));
            assert!(!list.contains(&u32::MAX));
            assert!(list.find(&7).is_end());
            assert!(list.find_first_greater(&7).is_end());
            assert!(list.find_last_less(&7).is_end());
            assert_eq!(list.index_of(&7), None);
            assert_eq!(list.begin(), list.end());
            assert_eq!(list.at(0), Err(SkiplistError::IndexOutOfBounds { index: 0, len: 0 }));

            let _check_that_debug_works = format!("{list:?}");
        }

        #[test]
        fn empty_list_iter() {
            let list = &RankedSkiplist::<u32, $cmp>::new(<$cmp>::default());

            let mut iter: Iter<'_, u32, $cmp> = list.into_iter();

            assert_eq!(iter.size_hint(), (0, Some(0)));
            assert!(iter.cursor().is_end());
            assert!(iter.next().is_none());
            assert!(iter.next().is_none());

            assert_eq!(list.iter_from(list.end()).map(Iterator::count), Ok(0));
        }

        #[test]
        fn empty_list_cursor() {
            let mut list = RankedSkiplist::<u32, $cmp>::new(<$cmp>::default());
            let mut cursor = list.begin();

            assert_eq!(list.current(cursor), Err(SkiplistError::CursorAtEnd));
            assert_eq!(list.advance(&mut cursor), Err(SkiplistError::CursorAtEnd));
            assert_eq!(list.remove_at(&mut cursor), Err(SkiplistError::CursorAtEnd));
            assert!(!list.remove(&3));
            assert_eq!(list.take(&3), None);
        }

        // ================================
        //  Small Lists
        // ================================

        #[test]
        fn one_entry() {
            let mut list = build(&[42]);

            assert_eq!(list.len(), 1);
            assert_eq!(list.first(), Some(&42));
            assert_eq!(list.last(), Some(&42));
            assert_eq!(list.at(0), Ok(&42));
            assert_eq!(list.index_of(&42), Some(0));
            assert!(list.contains(&42));
            assert!(!list.contains(&41));

            let mut cursor = list.find(&42);
            assert_eq!(cursor, list.begin());
            assert_eq!(list.current(cursor), Ok(&42));

            assert_eq!(list.remove_at(&mut cursor), Ok(42));
            assert!(cursor.is_end());
            assert!(list.is_empty());
            assert!(list.find(&42).is_end());
        }

        #[test]
        fn iteration_is_sorted() {
            let entries = [17, 3, 99, 3, 0, 45, 12, 12, 12, 8, 61];
            let list = build(&entries);

            assert!(list.iter().copied().eq(sorted_with(&entries)));
            assert_eq!(list.iter().count(), entries.len());

            let mut cursor = list.begin();
            let mut walked = Vec::new();
            while let Ok(entry) = list.current(cursor) {
                walked.push(*entry);
                assert_eq!(list.advance(&mut cursor), Ok(()));
            }
            assert!(cursor.is_end());
            assert_eq!(walked, sorted_with(&entries));
        }

        #[test]
        fn positional_lookups() {
            let entries = [5, 3, 8, 1, 9, 9, 2, 7];
            let list = build(&entries);
            let sorted = sorted_with(&entries);

            for (index, entry) in sorted.iter().enumerate() {
                assert_eq!(list.at(index), Ok(entry));
                assert_eq!(list[index], *entry);
                assert_eq!(list.get(index), Some(entry));
                assert_eq!(list.current(list.cursor_at(index)), Ok(entry));
            }
            assert_eq!(list.get(sorted.len()), None);
            assert!(list.cursor_at(sorted.len()).is_end());
            assert_eq!(list.first(), sorted.first());
            assert_eq!(list.last(), sorted.last());
        }

        #[test]
        fn index_of_agrees_with_at() {
            let entries = [40, 10, 30, 10, 20, 50, 30, 30];
            let list = build(&entries);
            let sorted = sorted_with(&entries);

            for entry in &entries {
                let index = list.index_of(entry).unwrap();
                assert_eq!(list.at(index), Ok(entry));
                // `index_of` reports the first of several equal entries.
                assert_eq!(sorted.iter().position(|other| other == entry), Some(index));
            }
            assert_eq!(list.index_of(&35), None);
        }

        #[test]
        fn neighbor_searches() {
            let cmp = <$cmp>::default();
            let entries = [10, 20, 20, 30, 40];
            let list = build(&entries);
            let sorted = sorted_with(&entries);

            for key in [0, 10, 15, 20, 25, 40, 45] {
                let ordering = |entry: &u32| Comparator::cmp(&cmp, entry, &key);

                let expected_greater = sorted.iter().find(|entry| ordering(*entry).is_gt());
                assert_eq!(list.current(list.find_first_greater(&key)).ok(), expected_greater);

                let expected_less = sorted.iter().rev().find(|entry| ordering(*entry).is_lt());
                assert_eq!(list.current(list.find_last_less(&key)).ok(), expected_less);

                let expected_found = sorted.iter().find(|entry| ordering(*entry).is_eq());
                assert_eq!(list.current(list.find(&key)).ok(), expected_found);
            }
        }

        #[test]
        fn range_between_cursors() {
            let entries = [1, 2, 3, 4, 5, 6, 7];
            let list = build(&entries);
            let sorted = sorted_with(&entries);

            let start = list.cursor_at(2);
            let end = list.cursor_at(5);
            let range: Vec<u32> = list.range_between(start, end).unwrap().copied().collect();
            assert_eq!(range, sorted[2..5]);

            let tail: Vec<u32> = list.iter_from(start).unwrap().copied().collect();
            assert_eq!(tail, sorted[2..]);

            // An empty range.
            assert_eq!(list.range_between(start, start).map(Iterator::count), Ok(0));

            let mut iter = list.iter_from(end).unwrap();
            assert_eq!(iter.cursor(), end);
            let _skipped = iter.next();
            assert_eq!(iter.cursor(), list.cursor_at(6));
        }

        // ================================
        //  Removal
        // ================================

        #[test]
        fn removal_by_key() {
            let mut list = build(&[1, 2, 2, 3]);

            assert!(list.remove(&2));
            assert_eq!(list.len(), 3);
            assert!(list.contains(&2));
            assert_eq!(list.take(&2), Some(2));
            assert!(!list.contains(&2));
            assert!(!list.remove(&2));
            assert!(list.iter().copied().eq(sorted_with(&[1, 3])));
        }

        #[test]
        fn double_removal_through_a_cursor() {
            let mut list = build(&[4, 5, 6]);

            let cursor = list.find(&5);
            let mut first_use = cursor;
            let mut second_use = cursor;

            assert_eq!(list.remove_at(&mut first_use), Ok(5));
            assert_eq!(list.remove_at(&mut second_use), Err(SkiplistError::StaleCursor));
            // A failed removal leaves the cursor where it was.
            assert_eq!(second_use, cursor);
            assert_eq!(list.current(cursor), Err(SkiplistError::StaleCursor));
            assert_eq!(list.iter_from(cursor).err(), Some(SkiplistError::StaleCursor));
            assert_eq!(list.len(), 2);
        }

        #[test]
        fn cursors_survive_other_mutations() {
            let mut list = build(&[10, 20, 30]);
            let cursor = list.find(&20);

            list.insert(15);
            list.insert(25);
            assert!(list.remove(&10));
            assert!(list.remove(&30));

            assert_eq!(list.current(cursor), Ok(&20));
            assert_eq!(list.index_of(&20), list.iter().position(|entry| *entry == 20));
        }

        #[test]
        fn drain_through_cursors() {
            let entries: Vec<u32> = (0..500).map(|n| (n * 37) % 101).collect();
            let mut list = build(&entries);

            for entry in &entries {
                let mut cursor = list.find(entry);
                assert_eq!(list.remove_at(&mut cursor), Ok(*entry));
            }

            assert!(list.is_empty());
            assert!(list.begin().is_end());
            assert_eq!(list.iter().next(), None);
        }

        // ================================
        //  Large List
        // ================================

        #[cfg_attr(miri, ignore)]
        #[test]
        fn many_insertions_and_reads() {
            let mut prng = Rand32::new(0x_1234_5678);
            let entries: Vec<u32> = (0..2_048).map(|_| prng.rand_range(0..4_096)).collect();

            let list = build(&entries);
            let sorted = sorted_with(&entries);

            assert_eq!(list.len(), sorted.len());
            assert!(list.iter().eq(sorted.iter()));

            for _ in 0..512 {
                let index = prng.rand_range(0..2_048) as usize;
                assert_eq!(list.at(index), Ok(&sorted[index]));
            }

            for key in (0..4_096).step_by(7) {
                let first = sorted.iter().position(|entry| *entry == key);
                assert_eq!(list.index_of(&key), first);
                assert_eq!(list.contains(&key), first.is_some());
            }
        }
    };
}

pub(crate) use tests_for_all_comparators;
