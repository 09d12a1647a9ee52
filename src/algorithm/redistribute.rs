// Redistribución codiciosa del sobrante que dejó el reparto proporcional.
//
// Cada pasada recorre las candidatas en orden estable y suma una inasistencia
// a cada una que no esté saturada, deteniéndose cuando se acaba el sobrante.
// Se repiten pasadas hasta agotar el sobrante o hasta un punto fijo (ninguna
// candidata acepta más); lo que quede sin asignar se pierde.

use log::debug;
use crate::algorithm::distribute::Candidate;

/// Una pasada completa. No modifica la entrada: devuelve la nueva lista y el
/// sobrante restante.
pub fn fill_pass<'a>(candidates: &[Candidate<'a>], leftover: u64) -> (Vec<Candidate<'a>>, u64) {
    let mut remaining = leftover;
    let next = candidates
        .iter()
        .map(|c| {
            if remaining > 0 && !c.is_saturated() {
                remaining -= 1;
                Candidate { allocated_bunks: c.allocated_bunks + 1, ..*c }
            } else {
                *c
            }
        })
        .collect();
    (next, remaining)
}

/// Cantidad de pasadas seguidas en las que todas las candidatas abiertas
/// reciben una unidad sin que ninguna se sature antes de la última ni se
/// agote el sobrante a mitad de pasada.
fn uniform_passes(candidates: &[Candidate<'_>], leftover: u64) -> u64 {
    let open: Vec<u64> = candidates.iter().filter(|c| !c.is_saturated()).map(|c| c.headroom()).collect();
    match open.iter().min() {
        Some(&min_headroom) => (leftover / open.len() as u64).min(min_headroom),
        None => 0,
    }
}

/// Aplica `passes` pasadas uniformes de una vez; equivale a llamar
/// `fill_pass` esa cantidad de veces.
fn apply_uniform_passes<'a>(candidates: &[Candidate<'a>], passes: u64, leftover: u64) -> (Vec<Candidate<'a>>, u64) {
    let mut used = 0u64;
    let next = candidates
        .iter()
        .map(|c| {
            if c.is_saturated() {
                *c
            } else {
                used += passes;
                Candidate { allocated_bunks: c.allocated_bunks + passes, ..*c }
            }
        })
        .collect();
    (next, leftover - used)
}

/// Repite pasadas hasta agotar el sobrante o llegar a un punto fijo.
/// Devuelve las candidatas finales y el sobrante que no se pudo asignar.
pub fn redistribute_leftover<'a>(candidates: Vec<Candidate<'a>>, leftover: u64) -> (Vec<Candidate<'a>>, u64) {
    let mut current = candidates;
    let mut remaining = leftover;
    let mut passes = 0u64;

    while remaining > 0 {
        let uniform = uniform_passes(&current, remaining);
        let (next, after) = if uniform > 0 {
            passes += uniform;
            apply_uniform_passes(&current, uniform, remaining)
        } else {
            passes += 1;
            fill_pass(&current, remaining)
        };

        // punto fijo: ninguna candidata aceptó más
        if after == remaining {
            break;
        }
        current = next;
        remaining = after;
    }

    debug!("leftover redistribution: {} passes, {} units unallocated", passes, remaining);
    (current, remaining)
}
