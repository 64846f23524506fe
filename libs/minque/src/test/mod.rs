//! Scenarios shared by every [`PriorityQueue`](crate::PriorityQueue) implementation in the
//! workspace, plus the multi-threaded stress runner used by the `stress_tester` binary.
