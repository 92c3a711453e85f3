// Core module: the wallet profile and its snapshot/mutation contract.
//
// ISOLATION GUARANTEES:
// =====================
// 1. Account, Network and Profile are values: no interior mutability, no
//    shared identity. "Updating" one builds a new value.
// 2. Snapshots are frozen: a snapshot never observes a mutation made after
//    it was taken.
// 3. Mutations are atomic: readers see either the whole old profile or the
//    whole new one, never an intermediate.
//
// INVARIANTS:
// - Network and account positions are preserved by every update
// - Lookups use natural keys (network id, account address), never positions

pub mod network_id;
pub mod display_name;
pub mod address;
pub mod identified;
pub mod account;
pub mod network;
pub mod profile;
pub mod snapshot;
pub mod wallet;
