mod item_invariants;
