use criterion::{Criterion, criterion_group, criterion_main};
use ramswap::system::meminfo::{TRACKED_FIELDS, parse};
use ramswap::system::utilization::{memory_utilization, swap_utilization};
use std::hint::black_box;

const PROC_MEMINFO: &str = "\
MemTotal:       32594868 kB
MemFree:         8204460 kB
MemAvailable:   21113708 kB
Buffers:          954400 kB
Cached:         11608632 kB
SwapCached:         2048 kB
Active:         12468520 kB
Inactive:        9331404 kB
Active(anon):    9052424 kB
Inactive(anon):   420160 kB
Active(file):    3416096 kB
Inactive(file):  8911244 kB
Unevictable:      125480 kB
Mlocked:              48 kB
SwapTotal:       8388604 kB
SwapFree:        8371964 kB
Zswap:                 0 kB
Zswapped:              0 kB
Dirty:              1328 kB
Writeback:             0 kB
AnonPages:       9362508 kB
Mapped:          1802616 kB
Shmem:            236380 kB
KReclaimable:     527668 kB
Slab:             908052 kB
SReclaimable:     527668 kB
SUnreclaim:       380384 kB
KernelStack:       30912 kB
PageTables:        84260 kB
CommitLimit:    24686036 kB
Committed_AS:   27398748 kB
VmallocTotal:   34359738367 kB
VmallocUsed:      151476 kB
HugePages_Total:       0
HugePages_Free:        0
Hugepagesize:       2048 kB
DirectMap4k:      681792 kB
DirectMap2M:    22409216 kB
DirectMap1G:    10485760 kB
";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("meminfo_parse_tracked", |b| {
        b.iter(|| parse(black_box(PROC_MEMINFO), black_box(&TRACKED_FIELDS)))
    });

    c.bench_function("meminfo_parse_and_ratios", |b| {
        b.iter(|| {
            let stats = parse(black_box(PROC_MEMINFO), &TRACKED_FIELDS);
            (memory_utilization(&stats), swap_utilization(&stats))
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
