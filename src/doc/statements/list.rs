/*!
# `LIST`

## Purpose
Show the BASIC program currently in memory.

## Remarks
Lines are shown exactly as typed, in line number order.

## Example
```text
20 PRINT 2
10 PRINT 1
LIST
10 PRINT 1
20 PRINT 2
```

*/
