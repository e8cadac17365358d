/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Everything after `REM` is ignored, so it may contain anything.
A direct-mode `REM` does nothing.

## Example
```text
10 REM Authored by Zaphod
20 PRINT 42
RUN
42
```

*/
